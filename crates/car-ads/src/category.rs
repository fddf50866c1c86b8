use carrental_core::{DomainResult, Entity, InvalidCarAd, guard};

use crate::constants::category::{MAX_DESCRIPTION_LENGTH, MIN_DESCRIPTION_LENGTH};
use crate::constants::common::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};

carrental_core::int_id! {
    /// Category identifier, assigned by persistence.
    pub struct CategoryId;
}

/// Car category (economy, estate, ...), a reference entity seeded at startup.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();

        guard::for_string_length::<InvalidCarAd>(&name, MIN_NAME_LENGTH, MAX_NAME_LENGTH, "Name")?;
        guard::for_string_length::<InvalidCarAd>(
            &description,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
            "Description",
        )?;

        Ok(Self {
            id: CategoryId::default(),
            name,
            description,
        })
    }

    /// Rebuild a stored category. Skips validation.
    pub fn rehydrate(id: CategoryId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

carrental_core::entity_identity!(Category);

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::DomainError;

    #[test]
    fn valid_category_is_created() {
        let category = Category::new("Valid name", "Valid description text").unwrap();

        assert_eq!(category.name(), "Valid name");
        assert_eq!(category.description(), "Valid description text");
    }

    #[test]
    fn invalid_name_is_rejected() {
        let err = Category::new("", "Valid description text").unwrap_err();

        assert!(matches!(err, DomainError::InvalidCarAd(_)));
    }

    #[test]
    fn short_description_is_rejected() {
        let err = Category::new("Economy", "Too short").unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid car ad: Description must have between 20 and 1000 symbols."
        );
    }
}
