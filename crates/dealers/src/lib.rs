//! Dealers domain module.
//!
//! The `Dealer` aggregate, its phone number value object and the validating
//! factory that builds it.

pub mod dealer;
pub mod factory;
pub mod phone_number;

pub use dealer::{Dealer, DealerId};
pub use factory::DealerFactory;
pub use phone_number::PhoneNumber;
