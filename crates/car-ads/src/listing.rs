//! Read-side projections of a car ad.

use serde::Serialize;

use carrental_core::Entity;

use crate::car_ad::{CarAd, CarAdId};

/// One row of a car ad search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarAdListing {
    pub id: CarAdId,
    pub manufacturer: String,
    pub model: String,
    pub image_url: String,
    pub category: String,
    pub price_per_day: i64,
}

impl From<&CarAd> for CarAdListing {
    fn from(car_ad: &CarAd) -> Self {
        Self {
            id: *car_ad.id(),
            manufacturer: car_ad.manufacturer().name().to_string(),
            model: car_ad.model().to_string(),
            image_url: car_ad.image_url().to_string(),
            category: car_ad.category().name().to_string(),
            price_per_day: car_ad.price_per_day(),
        }
    }
}

/// Result of creating a car ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarAdOutput {
    pub car_ad_id: CarAdId,
}

impl From<&CarAd> for CreateCarAdOutput {
    fn from(car_ad: &CarAd) -> Self {
        Self {
            car_ad_id: *car_ad.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::CarAdFactory;
    use crate::transmission_type::TransmissionType;

    fn car_ad() -> CarAd {
        CarAdFactory::new()
            .with_manufacturer_name("Volvo")
            .unwrap()
            .with_model("XC60")
            .with_category_parts("SUV", "Large cars with higher ground clearance")
            .unwrap()
            .with_image_url("/images/xc60.png")
            .with_price_per_day(8_900)
            .with_options_parts(true, 5, TransmissionType::Automatic)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn listing_flattens_manufacturer_and_category_names() {
        let car_ad = car_ad();
        let listing = CarAdListing::from(&car_ad);

        assert_eq!(listing.id, *car_ad.id());
        assert_eq!(listing.manufacturer, "Volvo");
        assert_eq!(listing.model, "XC60");
        assert_eq!(listing.image_url, "/images/xc60.png");
        assert_eq!(listing.category, "SUV");
        assert_eq!(listing.price_per_day, 8_900);
    }

    #[test]
    fn listing_serializes_with_camel_case_keys() {
        let car_ad = car_ad();
        let json = serde_json::to_value(CarAdListing::from(&car_ad)).unwrap();

        assert_eq!(json["manufacturer"], "Volvo");
        assert_eq!(json["imageUrl"], "/images/xc60.png");
        assert_eq!(json["pricePerDay"], 8_900);
        assert_eq!(json["id"], car_ad.id().to_string());
    }

    #[test]
    fn create_output_carries_the_new_id() {
        let car_ad = car_ad();
        let output = CreateCarAdOutput::from(&car_ad);

        assert_eq!(output.car_ad_id, *car_ad.id());
        assert_eq!(
            serde_json::to_value(output).unwrap()["carAdId"],
            car_ad.id().to_string()
        );
    }
}
