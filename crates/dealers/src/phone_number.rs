use std::sync::OnceLock;

use carrental_core::{DomainResult, InvalidPhoneNumber, guard};
use regex::Regex;
use serde::Serialize;

pub const MIN_PHONE_NUMBER_LENGTH: usize = 5;
pub const MAX_PHONE_NUMBER_LENGTH: usize = 20;
pub const PHONE_NUMBER_REGULAR_EXPRESSION: &str = r"\+[0-9]*";

/// The phone number pattern, anchored and compiled once.
fn phone_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        guard::anchored_regex(PHONE_NUMBER_REGULAR_EXPRESSION).expect("valid phone number pattern")
    })
}

/// Dealer contact number (value object): a `+` followed by digits.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    number: String,
}

carrental_core::value_object!(PhoneNumber { number: String });

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> DomainResult<Self> {
        let number = number.into();

        guard::for_string_length::<InvalidPhoneNumber>(
            &number,
            MIN_PHONE_NUMBER_LENGTH,
            MAX_PHONE_NUMBER_LENGTH,
            "PhoneNumber",
        )?;
        guard::matches_regex(
            &number,
            phone_number_regex(),
            "Phone number must start with a '+' and contain only digits afterwards.",
        )?;

        Ok(Self { number })
    }

    /// Rebuild a stored number. Skips validation.
    pub fn rehydrate(number: String) -> Self {
        Self { number }
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = carrental_core::DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.number
    }
}

impl core::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::DomainError;

    #[test]
    fn phone_number_is_created_correctly_with_valid_number() {
        let phone = PhoneNumber::new("+359123456789").unwrap();

        assert_eq!(phone.as_str(), "+359123456789");
    }

    #[test]
    fn conversions_from_and_to_string() {
        let phone = PhoneNumber::try_from("+359123456789").unwrap();
        let back: String = phone.clone().into();

        assert_eq!(back, "+359123456789");
        assert_eq!(phone.to_string(), back);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert_eq!(
            PhoneNumber::new("").unwrap_err(),
            DomainError::InvalidPhoneNumber(InvalidPhoneNumber(
                "PhoneNumber cannot be null or empty.".into()
            ))
        );
        assert_eq!(
            PhoneNumber::new("+1234567890123456789012").unwrap_err(),
            DomainError::InvalidPhoneNumber(InvalidPhoneNumber(
                "PhoneNumber must have between 5 and 20 symbols.".into()
            ))
        );
        assert_eq!(
            PhoneNumber::new("0888123456").unwrap_err(),
            DomainError::InvalidPhoneNumber(InvalidPhoneNumber(
                "Phone number must start with a '+' and contain only digits afterwards.".into()
            ))
        );
    }

    #[test]
    fn pattern_is_compiled_once() {
        PhoneNumber::new("+359123456789").unwrap();
        PhoneNumber::new("+359987654321").unwrap();

        assert!(std::ptr::eq(phone_number_regex(), phone_number_regex()));
        assert!(phone_number_regex().is_match("+35988"));
        assert!(!phone_number_regex().is_match("+35988 "));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            PhoneNumber::new("+35988").unwrap(),
            PhoneNumber::rehydrate("+35988".into())
        );
        assert_ne!(
            PhoneNumber::new("+35988").unwrap(),
            PhoneNumber::new("+35989").unwrap()
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn plus_followed_by_digits_is_accepted(digits in "[0-9]{4,19}") {
                let number = format!("+{digits}");
                let phone = PhoneNumber::new(number.as_str()).unwrap();
                prop_assert_eq!(phone.as_str(), number.as_str());
            }

            #[test]
            fn letters_are_rejected(body in "[a-z]{4,19}") {
                let number = format!("+{body}");
                prop_assert!(PhoneNumber::new(number).is_err());
            }
        }
    }
}
