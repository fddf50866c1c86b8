//! Configuration loading and representation.
//!
//! Every setting comes from an environment variable with a default. Values
//! that fail to parse are logged and replaced by the default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const SEED_CATEGORIES_ENV: &str = "CARRENTAL_SEED_CATEGORIES";
pub const SEED_DEMO_CAR_ADS_ENV: &str = "CARRENTAL_SEED_DEMO_CAR_ADS";
pub const LISTING_LIMIT_ENV: &str = "CARRENTAL_LISTING_LIMIT";

/// Optional cap on the number of listings returned by one search.
///
/// Unset by default: a search returns every matching available ad. Only
/// listings are capped; the total count always covers every available ad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLimit(Option<usize>);

impl ListingLimit {
    pub const MAX: usize = 1000;

    /// No cap.
    pub const fn unlimited() -> Self {
        Self(None)
    }

    pub fn new(limit: Option<usize>) -> Self {
        Self(limit.map(|limit| limit.min(Self::MAX)))
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }
}

/// Infrastructure settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Insert the initial category catalogue at startup.
    pub seed_categories: bool,
    /// Number of demo car ads to insert at startup.
    pub seed_demo_car_ads: usize,
    pub listing_limit: ListingLimit,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            seed_categories: true,
            seed_demo_car_ads: 0,
            listing_limit: ListingLimit::default(),
        }
    }
}

impl InfraConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            seed_categories: parse(&lookup, SEED_CATEGORIES_ENV)
                .unwrap_or(defaults.seed_categories),
            seed_demo_car_ads: parse(&lookup, SEED_DEMO_CAR_ADS_ENV)
                .unwrap_or(defaults.seed_demo_car_ads),
            listing_limit: ListingLimit::new(parse(&lookup, LISTING_LIMIT_ENV)),
        }
    }
}

/// `None` when the key is unset or its value does not parse.
fn parse<T, L>(lookup: &L, key: &str) -> Option<T>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;

    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not valid; using the default");
            None
        }
    }
}
