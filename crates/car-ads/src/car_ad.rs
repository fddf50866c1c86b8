use carrental_core::{
    AggregateRoot, DomainResult, Entity, Enumeration, InvalidCarAd, Operand, Queryable, guard,
};

use crate::category::Category;
use crate::constants::car_ad::{
    MAX_MODEL_LENGTH, MAX_PRICE_PER_DAY, MIN_MODEL_LENGTH, MIN_PRICE_PER_DAY,
};
use crate::manufacturer::Manufacturer;
use crate::options::Options;

carrental_core::uuid_id! {
    /// Car ad identifier, generated when the ad is built.
    pub struct CarAdId;
}

/// Aggregate root: a car offered for rent.
#[derive(Debug, Clone)]
pub struct CarAd {
    id: CarAdId,
    manufacturer: Manufacturer,
    model: String,
    category: Category,
    image_url: String,
    price_per_day: i64,
    options: Options,
    is_available: bool,
}

impl CarAd {
    /// Validate and create a new ad. Use [`CarAdFactory`](crate::CarAdFactory).
    pub(crate) fn new(
        manufacturer: Manufacturer,
        model: String,
        category: Category,
        image_url: String,
        price_per_day: i64,
        options: Options,
        is_available: bool,
    ) -> DomainResult<Self> {
        Self::validate(&model, &image_url, price_per_day)?;

        Ok(Self {
            id: CarAdId::new(),
            manufacturer,
            model,
            category,
            image_url,
            price_per_day,
            options,
            is_available,
        })
    }

    /// Rebuild a stored ad. Skips validation; only persistence should call this.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: CarAdId,
        manufacturer: Manufacturer,
        model: String,
        category: Category,
        image_url: String,
        price_per_day: i64,
        options: Options,
        is_available: bool,
    ) -> Self {
        Self {
            id,
            manufacturer,
            model,
            category,
            image_url,
            price_per_day,
            options,
            is_available,
        }
    }

    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Price in the smallest currency unit.
    pub fn price_per_day(&self) -> i64 {
        self.price_per_day
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn change_availability(&mut self) {
        self.is_available = !self.is_available;
    }

    fn validate(model: &str, image_url: &str, price_per_day: i64) -> DomainResult<()> {
        guard::for_string_length::<InvalidCarAd>(model, MIN_MODEL_LENGTH, MAX_MODEL_LENGTH, "Model")?;
        guard::for_valid_url::<InvalidCarAd>(image_url, "ImageUrl")?;
        guard::against_out_of_range::<InvalidCarAd, _>(
            price_per_day,
            MIN_PRICE_PER_DAY,
            MAX_PRICE_PER_DAY,
            "PricePerDay",
        )?;
        Ok(())
    }
}

impl Entity for CarAd {
    type Id = CarAdId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for CarAd {}

carrental_core::entity_identity!(CarAd);

/// Fields of a car ad that specifications can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CarAdField {
    ManufacturerName,
    Model,
    CategoryName,
    PricePerDay,
    IsAvailable,
    HasClimateControl,
    NumberOfSeats,
    TransmissionType,
}

impl Queryable for CarAd {
    type Field = CarAdField;

    fn field(&self, field: CarAdField) -> Operand {
        match field {
            CarAdField::ManufacturerName => Operand::from(self.manufacturer.name()),
            CarAdField::Model => Operand::from(self.model.as_str()),
            CarAdField::CategoryName => Operand::from(self.category.name()),
            CarAdField::PricePerDay => Operand::from(self.price_per_day),
            CarAdField::IsAvailable => Operand::from(self.is_available),
            CarAdField::HasClimateControl => Operand::from(self.options.has_climate_control()),
            CarAdField::NumberOfSeats => Operand::from(self.options.number_of_seats()),
            CarAdField::TransmissionType => Operand::from(self.options.transmission_type().value()),
        }
    }
}
