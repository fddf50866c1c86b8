//! Repository abstractions for the car ad and dealer aggregates.
//!
//! Repositories hand out rehydrated domain models and listing projections;
//! callers never see persisted rows.

pub mod in_memory;

use std::sync::Arc;

use carrental_car_ads::{CarAd, CarAdListing, Category, CategoryId, Manufacturer};
use carrental_core::Specification;
use carrental_dealers::{Dealer, DealerId};

use crate::error::RepositoryResult;

pub use in_memory::{InMemoryCarAdRepository, InMemoryDatabase, InMemoryDealerRepository};

/// Storage for car ads and the reference data they point at.
pub trait CarAdRepository: Send + Sync {
    /// Insert or replace a car ad. Unsaved manufacturers are stored (or
    /// matched by name), unsaved categories are stored.
    fn save(&self, car_ad: &CarAd) -> RepositoryResult<()>;

    /// Available car ads matching every included specification, as listings.
    fn listings(
        &self,
        specifications: &[&dyn Specification<CarAd>],
    ) -> RepositoryResult<Vec<CarAdListing>>;

    /// Number of available car ads, independent of any search filter.
    fn total(&self) -> RepositoryResult<usize>;

    fn category(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;

    fn categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Store a category and return it with its assigned id.
    fn save_category(&self, category: &Category) -> RepositoryResult<Category>;

    /// Manufacturer with exactly this name.
    fn manufacturer(&self, name: &str) -> RepositoryResult<Option<Manufacturer>>;
}

/// Storage for dealers and the car ads they own.
pub trait DealerRepository: Send + Sync {
    /// Insert or replace a dealer together with its car ads.
    fn save(&self, dealer: &Dealer) -> RepositoryResult<()>;

    /// Fails with an invalid-dealer error when no such dealer exists.
    fn dealer(&self, id: DealerId) -> RepositoryResult<Dealer>;
}

impl<S> CarAdRepository for Arc<S>
where
    S: CarAdRepository + ?Sized,
{
    fn save(&self, car_ad: &CarAd) -> RepositoryResult<()> {
        (**self).save(car_ad)
    }

    fn listings(
        &self,
        specifications: &[&dyn Specification<CarAd>],
    ) -> RepositoryResult<Vec<CarAdListing>> {
        (**self).listings(specifications)
    }

    fn total(&self) -> RepositoryResult<usize> {
        (**self).total()
    }

    fn category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        (**self).category(id)
    }

    fn categories(&self) -> RepositoryResult<Vec<Category>> {
        (**self).categories()
    }

    fn save_category(&self, category: &Category) -> RepositoryResult<Category> {
        (**self).save_category(category)
    }

    fn manufacturer(&self, name: &str) -> RepositoryResult<Option<Manufacturer>> {
        (**self).manufacturer(name)
    }
}

impl<S> DealerRepository for Arc<S>
where
    S: DealerRepository + ?Sized,
{
    fn save(&self, dealer: &Dealer) -> RepositoryResult<()> {
        (**self).save(dealer)
    }

    fn dealer(&self, id: DealerId) -> RepositoryResult<Dealer> {
        (**self).dealer(id)
    }
}
