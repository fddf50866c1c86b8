//! Validating builder for [`Dealer`].

use carrental_core::{DomainError, DomainResult, Entity, Factory};

use crate::dealer::Dealer;

/// Accumulates the parts of a dealer.
///
/// The name is mandatory at this level. The phone number defaults to empty,
/// which the dealer's own validation rejects as an invalid phone number.
#[derive(Debug, Clone, Default)]
pub struct DealerFactory {
    name: Option<String>,
    phone_number: String,
}

impl DealerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn build(self) -> DomainResult<Dealer> {
        let Some(name) = self.name else {
            tracing::warn!("dealer factory built without a name");
            return Err(DomainError::missing_parts("dealer", "name"));
        };

        let dealer = Dealer::new(name, &self.phone_number)
            .inspect_err(|e| tracing::warn!("dealer rejected: {e}"))?;

        tracing::debug!(dealer_id = %dealer.id(), "dealer built");
        Ok(dealer)
    }

    /// Shortcut for `with_name(name).with_phone_number(phone_number).build()`.
    pub fn build_with(
        self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> DomainResult<Dealer> {
        self.with_name(name).with_phone_number(phone_number).build()
    }
}

impl Factory<Dealer> for DealerFactory {
    fn build(self) -> DomainResult<Dealer> {
        DealerFactory::build(self)
    }
}
