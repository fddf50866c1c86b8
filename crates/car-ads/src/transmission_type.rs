//! Gearbox type of a car.

carrental_core::enumeration! {
    /// Transmission type (persisted as its integer value).
    pub enum TransmissionType {
        Manual = 1,
        Automatic = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::enumeration::{self, Enumeration};

    #[test]
    fn all_transmission_types_are_declared() {
        assert_eq!(TransmissionType::Automatic.name(), "Automatic");
        assert_eq!(TransmissionType::Automatic.value(), 2);

        assert_eq!(TransmissionType::Manual.name(), "Manual");
        assert_eq!(TransmissionType::Manual.value(), 1);

        assert!(enumeration::has_unique_members::<TransmissionType>());
    }

    #[test]
    fn every_member_round_trips_through_lookups() {
        for member in enumeration::get_all::<TransmissionType>() {
            assert_eq!(enumeration::from_value::<TransmissionType>(member.value()).unwrap(), member);
            assert_eq!(enumeration::from_name::<TransmissionType>(member.name()).unwrap(), member);
        }
    }

    #[test]
    fn raw_values_from_requests_are_checked() {
        assert_eq!(TransmissionType::try_from(1).unwrap(), TransmissionType::Manual);

        let err = TransmissionType::try_from(0).unwrap_err();
        assert_eq!(err.to_string(), "'0' is not a valid value in TransmissionType");
    }
}
