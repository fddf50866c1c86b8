use carrental_core::{DomainResult, InvalidOptions, guard};
use serde::Serialize;

use crate::constants::options::{MAX_NUMBER_OF_SEATS, MIN_NUMBER_OF_SEATS};
use crate::transmission_type::TransmissionType;

/// Equipment of a car (value object).
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    has_climate_control: bool,
    number_of_seats: i32,
    transmission_type: TransmissionType,
}

carrental_core::value_object!(Options {
    has_climate_control: bool,
    number_of_seats: i32,
    transmission_type: TransmissionType,
});

impl Options {
    pub fn new(
        has_climate_control: bool,
        number_of_seats: i32,
        transmission_type: TransmissionType,
    ) -> DomainResult<Self> {
        guard::against_out_of_range::<InvalidOptions, _>(
            number_of_seats,
            MIN_NUMBER_OF_SEATS,
            MAX_NUMBER_OF_SEATS,
            "NumberOfSeats",
        )?;

        Ok(Self {
            has_climate_control,
            number_of_seats,
            transmission_type,
        })
    }

    /// Rebuild stored options. Skips validation.
    pub fn rehydrate(
        has_climate_control: bool,
        number_of_seats: i32,
        transmission_type: TransmissionType,
    ) -> Self {
        Self {
            has_climate_control,
            number_of_seats,
            transmission_type,
        }
    }

    pub fn has_climate_control(&self) -> bool {
        self.has_climate_control
    }

    pub fn number_of_seats(&self) -> i32 {
        self.number_of_seats
    }

    pub fn transmission_type(&self) -> TransmissionType {
        self.transmission_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::DomainError;

    #[test]
    fn options_are_created_correctly() {
        let options = Options::new(true, 4, TransmissionType::Automatic).unwrap();

        assert!(options.has_climate_control());
        assert_eq!(options.number_of_seats(), 4);
        assert_eq!(options.transmission_type(), TransmissionType::Automatic);
    }

    #[test]
    fn invalid_number_of_seats_is_rejected() {
        for seats in [1, 51] {
            match Options::new(true, seats, TransmissionType::Automatic) {
                Err(DomainError::InvalidOptions(_)) => {}
                other => panic!("expected InvalidOptions for {seats}, got {other:?}"),
            }
        }
    }

    #[test]
    fn seat_bounds_are_inclusive() {
        assert!(Options::new(false, 2, TransmissionType::Manual).is_ok());
        assert!(Options::new(false, 50, TransmissionType::Manual).is_ok());
    }

    #[test]
    fn options_compare_by_value() {
        let a = Options::new(true, 4, TransmissionType::Automatic).unwrap();
        let b = Options::new(true, 4, TransmissionType::Automatic).unwrap();
        let c = Options::new(true, 4, TransmissionType::Manual).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction succeeds exactly for seat counts in range.
            #[test]
            fn seats_validated_inclusively(seats in -10i32..100, climate in any::<bool>()) {
                let result = Options::new(climate, seats, TransmissionType::Manual);
                prop_assert_eq!(result.is_ok(), (2..=50).contains(&seats));
            }
        }
    }
}
