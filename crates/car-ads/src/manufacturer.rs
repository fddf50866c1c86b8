use carrental_core::{DomainResult, Entity, InvalidCarAd, guard};

use crate::constants::common::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};

carrental_core::int_id! {
    /// Manufacturer identifier, assigned by persistence.
    pub struct ManufacturerId;
}

/// Car manufacturer (reference entity shared between car ads).
#[derive(Debug, Clone)]
pub struct Manufacturer {
    id: ManufacturerId,
    name: String,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        guard::for_string_length::<InvalidCarAd>(
            &name,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
            "Manufacturer",
        )?;

        Ok(Self {
            id: ManufacturerId::default(),
            name,
        })
    }

    /// Rebuild a stored manufacturer. Skips validation.
    pub fn rehydrate(id: ManufacturerId, name: String) -> Self {
        Self { id, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Manufacturer {
    type Id = ManufacturerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

carrental_core::entity_identity!(Manufacturer);

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::{DomainError, EntityId};

    #[test]
    fn manufacturer_is_created_correctly() {
        let manufacturer = Manufacturer::new("Valid Manufacturer").unwrap();

        assert_eq!(manufacturer.name(), "Valid Manufacturer");
        assert!(manufacturer.id().is_unset());
    }

    #[test]
    fn manufacturer_rejects_invalid_names() {
        for name in ["", "I", "Global Invalid Manufacturer"] {
            match Manufacturer::new(name) {
                Err(DomainError::InvalidCarAd(_)) => {}
                other => panic!("expected InvalidCarAd for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unsaved_manufacturers_are_distinct() {
        let a = Manufacturer::new("Audi").unwrap();
        let b = Manufacturer::new("Audi").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn stored_manufacturers_compare_by_id() {
        let a = Manufacturer::rehydrate(ManufacturerId::new(4), "Audi".into());
        let b = Manufacturer::rehydrate(ManufacturerId::new(4), "AUDI".into());

        assert_eq!(a, b);
    }
}
