//! Validation bounds shared by the car-ad and dealer models.
//!
//! All ranges are inclusive.

pub mod common {
    pub const MIN_NAME_LENGTH: usize = 2;
    pub const MAX_NAME_LENGTH: usize = 20;
}

pub mod category {
    pub const MIN_DESCRIPTION_LENGTH: usize = 20;
    pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
}

pub mod options {
    pub const MIN_NUMBER_OF_SEATS: i32 = 2;
    pub const MAX_NUMBER_OF_SEATS: i32 = 50;
}

pub mod car_ad {
    pub const MIN_MODEL_LENGTH: usize = 2;
    pub const MAX_MODEL_LENGTH: usize = 20;
    /// Prices are in the smallest currency unit (e.g. cents).
    pub const MIN_PRICE_PER_DAY: i64 = 0;
    pub const MAX_PRICE_PER_DAY: i64 = i64::MAX;
}
