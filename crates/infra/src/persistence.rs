//! Persisted row shapes and the conversions between rows and domain models.
//!
//! Rows are flat: a car ad references its manufacturer and category by id and
//! stores its options inline, the way the relational schema lays them out.
//! Rehydration rebuilds models without running construction-time validation;
//! rows were validated when the models were first built.

use carrental_car_ads::{
    CarAd, CarAdId, Category, CategoryId, Manufacturer, ManufacturerId, Options, TransmissionType,
};
use carrental_core::{DomainResult, Entity, Enumeration};
use carrental_dealers::{Dealer, DealerId, PhoneNumber};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarAdRecord {
    pub id: CarAdId,
    pub dealer_id: Option<DealerId>,
    pub manufacturer_id: i32,
    pub model: String,
    pub category_id: i32,
    pub image_url: String,
    pub price_per_day: i64,
    pub has_climate_control: bool,
    pub number_of_seats: i32,
    pub transmission_type: i32,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerRecord {
    pub id: DealerId,
    pub name: String,
    pub phone_number: String,
}

impl CategoryRecord {
    pub fn from_category(id: i32, category: &Category) -> Self {
        Self {
            id,
            name: category.name().to_string(),
            description: category.description().to_string(),
        }
    }
}

impl ManufacturerRecord {
    pub fn from_manufacturer(id: i32, manufacturer: &Manufacturer) -> Self {
        Self {
            id,
            name: manufacturer.name().to_string(),
        }
    }
}

impl CarAdRecord {
    pub fn from_car_ad(
        car_ad: &CarAd,
        dealer_id: Option<DealerId>,
        manufacturer_id: i32,
        category_id: i32,
    ) -> Self {
        let options = car_ad.options();

        Self {
            id: *car_ad.id(),
            dealer_id,
            manufacturer_id,
            model: car_ad.model().to_string(),
            category_id,
            image_url: car_ad.image_url().to_string(),
            price_per_day: car_ad.price_per_day(),
            has_climate_control: options.has_climate_control(),
            number_of_seats: options.number_of_seats(),
            transmission_type: options.transmission_type().value(),
            is_available: car_ad.is_available(),
        }
    }
}

impl From<&Dealer> for DealerRecord {
    fn from(dealer: &Dealer) -> Self {
        Self {
            id: *dealer.id(),
            name: dealer.name().to_string(),
            phone_number: dealer.phone_number().as_str().to_string(),
        }
    }
}

pub fn rehydrate_category(record: &CategoryRecord) -> Category {
    Category::rehydrate(
        CategoryId::new(record.id),
        record.name.clone(),
        record.description.clone(),
    )
}

pub fn rehydrate_manufacturer(record: &ManufacturerRecord) -> Manufacturer {
    Manufacturer::rehydrate(ManufacturerId::new(record.id), record.name.clone())
}

/// Rebuild a car ad from its row and the rows it references.
///
/// Fails only when the stored transmission type is no longer a declared member.
pub fn rehydrate_car_ad(
    record: &CarAdRecord,
    manufacturer: &ManufacturerRecord,
    category: &CategoryRecord,
) -> DomainResult<CarAd> {
    let transmission_type = TransmissionType::try_from(record.transmission_type)?;

    Ok(CarAd::rehydrate(
        record.id,
        rehydrate_manufacturer(manufacturer),
        record.model.clone(),
        rehydrate_category(category),
        record.image_url.clone(),
        record.price_per_day,
        Options::rehydrate(
            record.has_climate_control,
            record.number_of_seats,
            transmission_type,
        ),
        record.is_available,
    ))
}

pub fn rehydrate_dealer(record: &DealerRecord, car_ads: Vec<CarAd>) -> Dealer {
    Dealer::rehydrate(
        record.id,
        record.name.clone(),
        PhoneNumber::rehydrate(record.phone_number.clone()),
        car_ads,
    )
}
