//! Infrastructure layer: persistence, query translation, config, seeding.

pub mod config;
pub mod error;
pub mod persistence;
pub mod query;
pub mod repository;
pub mod search;
pub mod seed;


pub use config::{InfraConfig, ListingLimit};
pub use error::{RepositoryError, RepositoryResult};
pub use repository::{
    CarAdRepository, DealerRepository, InMemoryCarAdRepository, InMemoryDatabase,
    InMemoryDealerRepository,
};
pub use search::{CarAdSearch, SearchCarAdsQuery};
