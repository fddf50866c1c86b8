//! Validating builder for [`CarAd`].

use carrental_core::{DomainError, DomainResult, Entity, Factory};

use crate::car_ad::CarAd;
use crate::category::Category;
use crate::manufacturer::Manufacturer;
use crate::options::Options;
use crate::transmission_type::TransmissionType;

/// Accumulates the parts of a car ad.
///
/// Manufacturer, category and options are mandatory. Model and image url
/// default to empty and price to `0`, which the ad's own validation rejects
/// or accepts as usual.
#[derive(Debug, Clone, Default)]
pub struct CarAdFactory {
    manufacturer: Option<Manufacturer>,
    model: String,
    category: Option<Category>,
    image_url: String,
    price_per_day: i64,
    options: Option<Options>,
}

impl CarAdFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    /// Create and attach a manufacturer in one step.
    pub fn with_manufacturer_name(self, name: &str) -> DomainResult<Self> {
        Ok(self.with_manufacturer(Manufacturer::new(name)?))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_category_parts(self, name: &str, description: &str) -> DomainResult<Self> {
        Ok(self.with_category(Category::new(name, description)?))
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_price_per_day(mut self, price_per_day: i64) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_options_parts(
        self,
        has_climate_control: bool,
        number_of_seats: i32,
        transmission_type: TransmissionType,
    ) -> DomainResult<Self> {
        Ok(self.with_options(Options::new(
            has_climate_control,
            number_of_seats,
            transmission_type,
        )?))
    }

    pub fn build(self) -> DomainResult<CarAd> {
        let (Some(manufacturer), Some(category), Some(options)) =
            (self.manufacturer, self.category, self.options)
        else {
            tracing::warn!("car ad factory built without all mandatory parts");
            return Err(DomainError::missing_parts(
                "car ad",
                "manufacturer, category and options",
            ));
        };

        let car_ad = CarAd::new(
            manufacturer,
            self.model,
            category,
            self.image_url,
            self.price_per_day,
            options,
            true,
        )
        .inspect_err(|e| tracing::warn!("car ad rejected: {e}"))?;

        tracing::debug!(car_ad_id = %car_ad.id(), "car ad built");
        Ok(car_ad)
    }
}

impl Factory<CarAd> for CarAdFactory {
    fn build(self) -> DomainResult<CarAd> {
        CarAdFactory::build(self)
    }
}
