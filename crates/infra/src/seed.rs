//! Initial data loaded at startup.

use carrental_car_ads::{CarAd, CarAdFactory, Category, TransmissionType};
use carrental_core::DomainResult;
use serde::Serialize;

use crate::config::InfraConfig;
use crate::error::RepositoryResult;
use crate::repository::CarAdRepository;

const CATEGORIES: &[(&str, &str)] = &[
    (
        "Economy",
        "Small, fuel-efficient cars for city driving and short trips.",
    ),
    (
        "Compact",
        "Comfortable everyday cars with room for four adults.",
    ),
    (
        "Estate",
        "Family cars with a large boot for luggage and longer journeys.",
    ),
    (
        "Minivan",
        "Seven or more seats for groups and families travelling together.",
    ),
    (
        "SUV",
        "Higher driving position and ground clearance, often with all-wheel drive.",
    ),
    (
        "Cargo van",
        "Load space for moving house or transporting bulky goods.",
    ),
];

const DEMO_MODELS: &[(&str, &str)] = &[
    ("Skoda", "Fabia"),
    ("Volkswagen", "Golf"),
    ("Volvo", "V90"),
    ("Renault", "Espace"),
    ("Toyota", "RAV4"),
    ("Ford", "Transit"),
];

/// The category catalogue every installation starts with.
pub fn initial_categories() -> DomainResult<Vec<Category>> {
    CATEGORIES
        .iter()
        .map(|(name, description)| Category::new(*name, *description))
        .collect()
}

/// `count` deterministic demo car ads spread over `categories`.
///
/// Returns no ads when `categories` is empty.
pub fn demo_car_ads(count: usize, categories: &[Category]) -> DomainResult<Vec<CarAd>> {
    if categories.is_empty() {
        return Ok(Vec::new());
    }

    (0..count)
        .map(|i| {
            let (manufacturer, model) = DEMO_MODELS[i % DEMO_MODELS.len()];
            let category = categories[i % categories.len()].clone();
            let transmission_type = if i % 2 == 0 {
                TransmissionType::Manual
            } else {
                TransmissionType::Automatic
            };
            let price_per_day = 2_500 + 500 * (i as i64 % 20);

            CarAdFactory::new()
                .with_manufacturer_name(manufacturer)?
                .with_model(model)
                .with_category(category)
                .with_image_url(format!("/images/demo/{}.png", model.to_lowercase()))
                .with_price_per_day(price_per_day)
                .with_options_parts(i % 3 != 0, 2 + (i % 8) as i32, transmission_type)?
                .build()
        })
        .collect()
}

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub categories: usize,
    pub car_ads: usize,
}

/// Insert the initial data selected by `config`.
///
/// Categories already present (by name) are reused, so running the seed twice
/// adds demo car ads again but never duplicates categories.
pub fn seed<R>(repository: &R, config: &InfraConfig) -> RepositoryResult<SeedReport>
where
    R: CarAdRepository + ?Sized,
{
    let mut report = SeedReport::default();

    if config.seed_categories {
        for category in initial_categories()? {
            repository.save_category(&category)?;
            report.categories += 1;
        }
    }

    if config.seed_demo_car_ads > 0 {
        let categories = repository.categories()?;
        if categories.is_empty() {
            tracing::warn!("no categories stored; skipping demo car ads");
        }

        for car_ad in demo_car_ads(config.seed_demo_car_ads, &categories)? {
            repository.save(&car_ad)?;
            report.car_ads += 1;
        }
    }

    tracing::info!(
        categories = report.categories,
        car_ads = report.car_ads,
        "initial data seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::ListingLimit;
    use crate::repository::{InMemoryCarAdRepository, InMemoryDatabase};
    use carrental_core::Entity;

    fn repository() -> InMemoryCarAdRepository {
        InMemoryCarAdRepository::new(Arc::new(InMemoryDatabase::new()), ListingLimit::default())
    }

    #[test]
    fn initial_categories_are_valid() {
        let categories = initial_categories().unwrap();

        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].name(), "Economy");
    }

    #[test]
    fn demo_car_ads_are_valid_and_available() {
        let categories = initial_categories().unwrap();

        let car_ads = demo_car_ads(25, &categories).unwrap();

        assert_eq!(car_ads.len(), 25);
        assert!(car_ads.iter().all(CarAd::is_available));
        assert!(demo_car_ads(3, &[]).unwrap().is_empty());
    }

    #[test]
    fn seeding_twice_does_not_duplicate_categories() {
        let repository = repository();
        let config = InfraConfig {
            seed_demo_car_ads: 4,
            ..InfraConfig::default()
        };

        let first = seed(&repository, &config).unwrap();
        let second = seed(&repository, &config).unwrap();

        assert_eq!(first, SeedReport { categories: 6, car_ads: 4 });
        assert_eq!(second, first);
        assert_eq!(repository.categories().unwrap().len(), 6);
        assert_eq!(repository.total().unwrap(), 8);
    }

    #[test]
    fn demo_car_ads_reference_stored_categories() {
        let repository = repository();
        let config = InfraConfig {
            seed_demo_car_ads: 6,
            ..InfraConfig::default()
        };

        seed(&repository, &config).unwrap();

        let stored = repository.categories().unwrap();
        assert!(stored.iter().all(|c| c.id().value() > 0));
        assert_eq!(stored.len(), 6);

        let mut listed: Vec<String> = repository
            .listings(&[])
            .unwrap()
            .into_iter()
            .map(|listing| listing.category)
            .collect();
        let mut expected: Vec<String> = stored.iter().map(|c| c.name().to_string()).collect();
        listed.sort();
        expected.sort();
        assert_eq!(listed, expected);
    }

    #[test]
    fn nothing_is_seeded_when_disabled() {
        let repository = repository();
        let config = InfraConfig {
            seed_categories: false,
            seed_demo_car_ads: 5,
            ..InfraConfig::default()
        };

        let report = seed(&repository, &config).unwrap();

        assert_eq!(report, SeedReport::default());
        assert_eq!(repository.total().unwrap(), 0);
    }
}
