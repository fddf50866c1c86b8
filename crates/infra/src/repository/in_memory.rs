//! In-memory repositories for tests and local runs.
//!
//! Both repositories share one [`InMemoryDatabase`] holding persisted rows, so
//! a car ad saved through a dealer is visible to car ad searches and the
//! other way round. Every read rehydrates models from rows.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use carrental_car_ads::{
    AvailableCarAdSpecification, CarAd, CarAdListing, Category, CategoryId, Manufacturer,
};
use carrental_core::specification::filter_by;
use carrental_core::{DomainError, Entity, EntityId, InvalidDealer, Specification};
use carrental_dealers::{Dealer, DealerId};

use crate::config::ListingLimit;
use crate::error::{RepositoryError, RepositoryResult};
use crate::persistence::{
    CarAdRecord, CategoryRecord, DealerRecord, ManufacturerRecord, rehydrate_car_ad,
    rehydrate_category, rehydrate_dealer, rehydrate_manufacturer,
};
use crate::repository::{CarAdRepository, DealerRepository};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, CategoryRecord>,
    manufacturers: BTreeMap<i32, ManufacturerRecord>,
    /// Insertion order is listing order.
    car_ads: Vec<CarAdRecord>,
    dealers: HashMap<DealerId, DealerRecord>,
}

fn next_id<V>(table: &BTreeMap<i32, V>) -> i32 {
    table.keys().next_back().map_or(1, |id| id + 1)
}

impl Tables {
    /// Row id for a category.
    ///
    /// An unsaved category whose name is already stored resolves to that row,
    /// which is left untouched. Only new rows and categories carrying an id
    /// are written.
    fn store_category(&mut self, category: &Category) -> i32 {
        if !category.id().is_unset() {
            let id = category.id().value();
            self.categories
                .insert(id, CategoryRecord::from_category(id, category));
            return id;
        }

        if let Some(row) = self
            .categories
            .values()
            .find(|row| row.name == category.name())
        {
            return row.id;
        }

        let id = next_id(&self.categories);
        self.categories
            .insert(id, CategoryRecord::from_category(id, category));
        id
    }

    /// Row id for a manufacturer, resolved the same way as categories.
    fn store_manufacturer(&mut self, manufacturer: &Manufacturer) -> i32 {
        if !manufacturer.id().is_unset() {
            let id = manufacturer.id().value();
            self.manufacturers
                .insert(id, ManufacturerRecord::from_manufacturer(id, manufacturer));
            return id;
        }

        if let Some(row) = self
            .manufacturers
            .values()
            .find(|row| row.name == manufacturer.name())
        {
            return row.id;
        }

        let id = next_id(&self.manufacturers);
        self.manufacturers
            .insert(id, ManufacturerRecord::from_manufacturer(id, manufacturer));
        id
    }

    /// Insert or replace. A `None` owner keeps the owner already on record.
    fn store_car_ad(&mut self, car_ad: &CarAd, dealer_id: Option<DealerId>) {
        let manufacturer_id = self.store_manufacturer(car_ad.manufacturer());
        let category_id = self.store_category(car_ad.category());

        match self.car_ads.iter_mut().find(|row| row.id == *car_ad.id()) {
            Some(row) => {
                let dealer_id = dealer_id.or(row.dealer_id);
                *row = CarAdRecord::from_car_ad(car_ad, dealer_id, manufacturer_id, category_id);
            }
            None => self.car_ads.push(CarAdRecord::from_car_ad(
                car_ad,
                dealer_id,
                manufacturer_id,
                category_id,
            )),
        }
    }

    fn car_ad(&self, record: &CarAdRecord) -> RepositoryResult<CarAd> {
        let manufacturer = self.manufacturers.get(&record.manufacturer_id).ok_or_else(|| {
            RepositoryError::MissingReference {
                table: "manufacturers",
                id: record.manufacturer_id.to_string(),
            }
        })?;
        let category = self.categories.get(&record.category_id).ok_or_else(|| {
            RepositoryError::MissingReference {
                table: "categories",
                id: record.category_id.to_string(),
            }
        })?;

        Ok(rehydrate_car_ad(record, manufacturer, category)?)
    }
}

/// Shared row storage behind the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| RepositoryError::poisoned())
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| RepositoryError::poisoned())
    }
}

/// In-memory [`CarAdRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryCarAdRepository {
    db: Arc<InMemoryDatabase>,
    limit: ListingLimit,
}

impl InMemoryCarAdRepository {
    pub fn new(db: Arc<InMemoryDatabase>, limit: ListingLimit) -> Self {
        Self { db, limit }
    }
}

impl CarAdRepository for InMemoryCarAdRepository {
    fn save(&self, car_ad: &CarAd) -> RepositoryResult<()> {
        self.db.write()?.store_car_ad(car_ad, None);
        tracing::debug!(car_ad_id = %car_ad.id(), "car ad saved");
        Ok(())
    }

    fn listings(
        &self,
        specifications: &[&dyn Specification<CarAd>],
    ) -> RepositoryResult<Vec<CarAdListing>> {
        let car_ads = {
            let tables = self.db.read()?;
            tables
                .car_ads
                .iter()
                .map(|record| tables.car_ad(record))
                .collect::<RepositoryResult<Vec<_>>>()?
        };

        let available = AvailableCarAdSpecification;
        let mut conditions: Vec<&dyn Specification<CarAd>> = vec![&available];
        conditions.extend_from_slice(specifications);

        let listings: Vec<CarAdListing> = filter_by::<CarAd, _>(&car_ads, &conditions)
            .into_iter()
            .take(self.limit.get().unwrap_or(usize::MAX))
            .map(CarAdListing::from)
            .collect();

        tracing::debug!(count = listings.len(), "car ad listings loaded");
        Ok(listings)
    }

    fn total(&self) -> RepositoryResult<usize> {
        let tables = self.db.read()?;
        Ok(tables.car_ads.iter().filter(|row| row.is_available).count())
    }

    fn category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let tables = self.db.read()?;
        Ok(tables.categories.get(&id.value()).map(rehydrate_category))
    }

    fn categories(&self) -> RepositoryResult<Vec<Category>> {
        let tables = self.db.read()?;
        Ok(tables.categories.values().map(rehydrate_category).collect())
    }

    fn save_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut tables = self.db.write()?;
        let id = tables.store_category(category);
        let stored = tables
            .categories
            .get(&id)
            .ok_or_else(|| RepositoryError::MissingReference {
                table: "categories",
                id: id.to_string(),
            })?;
        tracing::debug!(category_id = id, name = %stored.name, "category saved");
        Ok(rehydrate_category(stored))
    }

    fn manufacturer(&self, name: &str) -> RepositoryResult<Option<Manufacturer>> {
        let tables = self.db.read()?;
        Ok(tables
            .manufacturers
            .values()
            .find(|row| row.name == name)
            .map(rehydrate_manufacturer))
    }
}

/// In-memory [`DealerRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryDealerRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryDealerRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

impl DealerRepository for InMemoryDealerRepository {
    fn save(&self, dealer: &Dealer) -> RepositoryResult<()> {
        let mut tables = self.db.write()?;
        tables.dealers.insert(*dealer.id(), DealerRecord::from(dealer));
        for car_ad in dealer.car_ads() {
            tables.store_car_ad(car_ad, Some(*dealer.id()));
        }

        tracing::debug!(
            dealer_id = %dealer.id(),
            car_ads = dealer.car_ads().len(),
            "dealer saved"
        );
        Ok(())
    }

    fn dealer(&self, id: DealerId) -> RepositoryResult<Dealer> {
        let tables = self.db.read()?;
        let record = tables.dealers.get(&id).ok_or_else(|| {
            tracing::warn!(dealer_id = %id, "dealer lookup failed");
            DomainError::from(InvalidDealer("dealer does not exist".to_string()))
        })?;

        let car_ads = tables
            .car_ads
            .iter()
            .filter(|row| row.dealer_id == Some(id))
            .map(|row| tables.car_ad(row))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(rehydrate_dealer(record, car_ads))
    }
}
