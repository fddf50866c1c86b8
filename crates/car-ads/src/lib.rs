//! Car ads domain module.
//!
//! The `CarAd` aggregate with its manufacturer, category and options, the
//! validating factory that builds it, and the search filters applied to car ad
//! listings. Pure domain logic: no IO, no storage.

pub mod car_ad;
pub mod category;
pub mod constants;
pub mod factory;
pub mod listing;
pub mod manufacturer;
pub mod options;
pub mod specifications;
pub mod transmission_type;

pub use car_ad::{CarAd, CarAdField, CarAdId};
pub use category::{Category, CategoryId};
pub use factory::CarAdFactory;
pub use listing::{CarAdListing, CreateCarAdOutput};
pub use manufacturer::{Manufacturer, ManufacturerId};
pub use options::Options;
pub use specifications::{
    AvailableCarAdSpecification, CarAdByManufacturerSpecification,
    CarAdByPricePerDaySpecification,
};
pub use transmission_type::TransmissionType;
