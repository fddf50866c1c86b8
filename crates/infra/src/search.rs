//! Car ad search: filters in, listings plus total out.

use carrental_car_ads::{
    CarAd, CarAdByManufacturerSpecification, CarAdByPricePerDaySpecification, CarAdListing,
};
use carrental_core::Specification;
use serde::{Deserialize, Serialize};

use crate::error::RepositoryResult;
use crate::repository::CarAdRepository;

/// Search filters. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCarAdsQuery {
    pub manufacturer: Option<String>,
    pub min_price_per_day: Option<i64>,
    pub max_price_per_day: Option<i64>,
}

/// Search result: the matching listings and the number of available ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarAdSearch {
    pub car_ads: Vec<CarAdListing>,
    pub total: usize,
}

impl SearchCarAdsQuery {
    pub fn execute<R>(&self, repository: &R) -> RepositoryResult<CarAdSearch>
    where
        R: CarAdRepository + ?Sized,
    {
        let by_manufacturer = CarAdByManufacturerSpecification::new(self.manufacturer.clone());
        let by_price =
            CarAdByPricePerDaySpecification::new(self.min_price_per_day, self.max_price_per_day);
        let specifications: [&dyn Specification<CarAd>; 2] = [&by_manufacturer, &by_price];

        let car_ads = repository.listings(&specifications)?;
        let total = repository.total()?;

        tracing::info!(
            manufacturer = ?self.manufacturer,
            matched = car_ads.len(),
            total,
            "car ad search"
        );
        Ok(CarAdSearch { car_ads, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use carrental_car_ads::{CarAdFactory, TransmissionType};

    use crate::config::ListingLimit;
    use crate::repository::{InMemoryCarAdRepository, InMemoryDatabase};

    fn repository(prices: &[(&str, i64)]) -> InMemoryCarAdRepository {
        let repository =
            InMemoryCarAdRepository::new(Arc::new(InMemoryDatabase::new()), ListingLimit::default());
        for (manufacturer, price) in prices {
            let car_ad = CarAdFactory::new()
                .with_manufacturer_name(manufacturer)
                .unwrap()
                .with_model("Model")
                .with_category_parts("Compact", "Comfortable everyday cars")
                .unwrap()
                .with_image_url("https://cdn.example.com/car.png")
                .with_price_per_day(*price)
                .with_options_parts(true, 5, TransmissionType::Manual)
                .unwrap()
                .build()
                .unwrap();
            repository.save(&car_ad).unwrap();
        }
        repository
    }

    #[test]
    fn empty_query_lists_every_available_ad() {
        let repository = repository(&[("Audi", 50), ("Volvo", 100)]);

        let search = SearchCarAdsQuery::default().execute(&repository).unwrap();

        assert_eq!(search.car_ads.len(), 2);
        assert_eq!(search.total, 2);
    }

    #[test]
    fn total_ignores_the_filters() {
        let repository = repository(&[("Audi", 50), ("Audi", 100), ("Volvo", 150)]);
        let query = SearchCarAdsQuery {
            manufacturer: Some("AUDI".into()),
            min_price_per_day: Some(50),
            max_price_per_day: None,
        };

        let search = query.execute(&repository).unwrap();

        assert_eq!(search.car_ads.len(), 1);
        assert_eq!(search.car_ads[0].price_per_day, 100);
        assert_eq!(search.total, 3);
    }

    #[test]
    fn default_query_returns_every_available_ad() {
        let prices: Vec<(&str, i64)> = (1..=60).map(|price| ("Audi", price)).collect();
        let repository = repository(&prices);

        let search = SearchCarAdsQuery::default().execute(&repository).unwrap();

        assert_eq!(search.car_ads.len(), 60);
        assert_eq!(search.total, 60);
    }

    #[test]
    fn query_deserializes_from_camel_case() {
        let query: SearchCarAdsQuery =
            serde_json::from_str(r#"{"manufacturer":"Audi","maxPricePerDay":120}"#).unwrap();

        assert_eq!(
            query,
            SearchCarAdsQuery {
                manufacturer: Some("Audi".into()),
                min_price_per_day: None,
                max_price_per_day: Some(120),
            }
        );
    }

    #[test]
    fn search_serializes_listings_and_total() {
        let repository = repository(&[("Audi", 50)]);

        let json = serde_json::to_value(SearchCarAdsQuery::default().execute(&repository).unwrap())
            .unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["carAds"][0]["manufacturer"], "Audi");
    }
}
