//! Search filters for car ads.
//!
//! Filters bind their parameters at construction and produce an
//! [`Expression`] over [`CarAdField`], so the same filter runs in memory or is
//! translated by the persistence layer.

use carrental_core::{Comparison, Expression, Specification};

use crate::car_ad::{CarAd, CarAdField};
use crate::constants::car_ad::{MAX_PRICE_PER_DAY, MIN_PRICE_PER_DAY};

/// Only ads currently offered for rent. Base condition of every listing.
#[derive(Debug, Copy, Clone, Default)]
pub struct AvailableCarAdSpecification;

impl Specification<CarAd> for AvailableCarAdSpecification {
    fn to_expression(&self) -> Expression<CarAdField> {
        Expression::equals(CarAdField::IsAvailable, true)
    }
}

/// Manufacturer name contains the filter, ignoring case.
///
/// Without a filter the specification is excluded and restricts nothing.
#[derive(Debug, Clone, Default)]
pub struct CarAdByManufacturerSpecification {
    manufacturer: Option<String>,
}

impl CarAdByManufacturerSpecification {
    pub fn new(manufacturer: Option<String>) -> Self {
        Self { manufacturer }
    }
}

impl Specification<CarAd> for CarAdByManufacturerSpecification {
    fn include(&self) -> bool {
        self.manufacturer.is_some()
    }

    fn to_expression(&self) -> Expression<CarAdField> {
        Expression::contains_ignore_case(
            CarAdField::ManufacturerName,
            self.manufacturer.clone().unwrap_or_default(),
        )
    }
}

/// Price strictly between `min` and `max`.
///
/// Both bounds are exclusive: an ad priced exactly at a bound is not matched.
#[derive(Debug, Copy, Clone)]
pub struct CarAdByPricePerDaySpecification {
    min: i64,
    max: i64,
}

impl CarAdByPricePerDaySpecification {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min: min.unwrap_or(MIN_PRICE_PER_DAY),
            max: max.unwrap_or(MAX_PRICE_PER_DAY),
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Default for CarAdByPricePerDaySpecification {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Specification<CarAd> for CarAdByPricePerDaySpecification {
    fn to_expression(&self) -> Expression<CarAdField> {
        Expression::compare(CarAdField::PricePerDay, Comparison::Gt, self.min).and(
            Expression::compare(CarAdField::PricePerDay, Comparison::Lt, self.max),
        )
    }
}
