//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// An error kind that a guard can raise.
///
/// Guards are generic over the kind so each call site decides which error a
/// failed check produces (`guard::for_string_length::<InvalidCarAd>(..)`).
pub trait GuardFailure: Sized {
    fn with_message(message: impl Into<String>) -> Self;

    fn message(&self) -> &str;
}

/// A car ad (or one of its parts) failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid car ad: {0}")]
pub struct InvalidCarAd(pub String);

/// Car options failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid options: {0}")]
pub struct InvalidOptions(pub String);

/// A dealer failed validation or could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid dealer: {0}")]
pub struct InvalidDealer(pub String);

/// A phone number failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid phone number: {0}")]
pub struct InvalidPhoneNumber(pub String);

macro_rules! impl_guard_failure {
    ($($t:ty),+ $(,)?) => {
        $(
            impl GuardFailure for $t {
                fn with_message(message: impl Into<String>) -> Self {
                    Self(message.into())
                }

                fn message(&self) -> &str {
                    &self.0
                }
            }
        )+
    };
}

impl_guard_failure!(InvalidCarAd, InvalidOptions, InvalidDealer, InvalidPhoneNumber);

/// Domain-level error.
///
/// Three families: invariant violations raised by guards during construction,
/// factories asked to build before every required part was supplied, and
/// enumeration lookups with no matching member. All of them come from invalid
/// input, so none of them is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    InvalidCarAd(#[from] InvalidCarAd),

    #[error(transparent)]
    InvalidOptions(#[from] InvalidOptions),

    #[error(transparent)]
    InvalidDealer(#[from] InvalidDealer),

    #[error(transparent)]
    InvalidPhoneNumber(#[from] InvalidPhoneNumber),

    /// A factory was built before all mandatory parts were supplied.
    #[error("invalid {aggregate}: {parts} must have a value")]
    MissingParts {
        aggregate: &'static str,
        parts: &'static str,
    },

    /// An enumeration lookup matched no declared member.
    #[error("'{value}' is not a valid {description} in {enumeration}")]
    EnumerationNotFound {
        value: String,
        description: &'static str,
        enumeration: &'static str,
    },
}

impl DomainError {
    pub fn missing_parts(aggregate: &'static str, parts: &'static str) -> Self {
        Self::MissingParts { aggregate, parts }
    }

    pub fn enumeration_not_found(
        value: impl ToString,
        description: &'static str,
        enumeration: &'static str,
    ) -> Self {
        Self::EnumerationNotFound {
            value: value.to_string(),
            description,
            enumeration,
        }
    }

    /// Whether this error is a guard failure (as opposed to a missing part or
    /// a failed lookup).
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCarAd(_)
                | Self::InvalidOptions(_)
                | Self::InvalidDealer(_)
                | Self::InvalidPhoneNumber(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_failures_convert_into_domain_error() {
        let err: DomainError = InvalidOptions::with_message("seats").into();
        assert_eq!(err, DomainError::InvalidOptions(InvalidOptions("seats".into())));
        assert!(err.is_invariant_violation());
        assert_eq!(err.to_string(), "invalid options: seats");
    }

    #[test]
    fn missing_parts_names_the_required_parts() {
        let err = DomainError::missing_parts("car ad", "manufacturer, category and options");
        assert!(!err.is_invariant_violation());
        assert_eq!(
            err.to_string(),
            "invalid car ad: manufacturer, category and options must have a value"
        );
    }

    #[test]
    fn enumeration_not_found_names_value_and_type() {
        let err = DomainError::enumeration_not_found(-5, "value", "TransmissionType");
        assert_eq!(err.to_string(), "'-5' is not a valid value in TransmissionType");
    }
}
