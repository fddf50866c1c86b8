//! Seed an in-memory store and print a car ad search as JSON.
//!
//! Usage: `carrental-seed [MANUFACTURER] [MIN_PRICE] [MAX_PRICE]`

use std::sync::Arc;

use anyhow::Context;

use carrental_infra::seed::seed;
use carrental_infra::{InMemoryCarAdRepository, InMemoryDatabase, InfraConfig, SearchCarAdsQuery};

fn main() -> anyhow::Result<()> {
    carrental_observability::init();

    let config = InfraConfig::from_env();
    tracing::info!(?config, "configuration loaded");

    let db = Arc::new(InMemoryDatabase::new());
    let car_ads = InMemoryCarAdRepository::new(db, config.listing_limit);
    seed(&car_ads, &config).context("seeding initial data")?;

    let mut args = std::env::args().skip(1);
    let query = SearchCarAdsQuery {
        manufacturer: args.next().filter(|m| !m.is_empty()),
        min_price_per_day: parse_price(args.next(), "MIN_PRICE")?,
        max_price_per_day: parse_price(args.next(), "MAX_PRICE")?,
    };

    let search = query.execute(&car_ads).context("searching car ads")?;
    println!("{}", serde_json::to_string_pretty(&search)?);
    Ok(())
}

fn parse_price(arg: Option<String>, name: &str) -> anyhow::Result<Option<i64>> {
    arg.map(|raw| {
        raw.parse::<i64>()
            .with_context(|| format!("{name} must be an integer, got {raw:?}"))
    })
    .transpose()
}
