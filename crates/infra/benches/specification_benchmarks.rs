use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use carrental_car_ads::{
    CarAd, CarAdByManufacturerSpecification, CarAdByPricePerDaySpecification,
};
use carrental_core::Specification;
use carrental_core::specification::filter_by;
use carrental_infra::query::car_ad_listing_query;
use carrental_infra::seed::{demo_car_ads, initial_categories};
use carrental_infra::{CarAdRepository, InMemoryCarAdRepository, InMemoryDatabase, ListingLimit};

fn car_ads(count: usize) -> Vec<CarAd> {
    let categories = initial_categories().expect("catalogue is valid");
    demo_car_ads(count, &categories).expect("demo car ads are valid")
}

/// In-memory filtering with both search specifications active.
fn bench_filter_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by");
    let by_manufacturer = CarAdByManufacturerSpecification::new(Some("vo".into()));
    let by_price = CarAdByPricePerDaySpecification::new(Some(3_000), Some(9_000));

    for size in [100usize, 1_000, 10_000] {
        let items = car_ads(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                let specifications: [&dyn Specification<CarAd>; 2] =
                    [&by_manufacturer, &by_price];
                black_box(filter_by::<CarAd, _>(items, &specifications).len())
            })
        });
    }

    group.finish();
}

/// Full repository search: rehydration, filtering, projection.
fn bench_repository_listings(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_listings");
    let by_price = CarAdByPricePerDaySpecification::new(Some(3_000), None);

    for size in [100usize, 1_000] {
        let repository =
            InMemoryCarAdRepository::new(Arc::new(InMemoryDatabase::new()), ListingLimit::new(Some(1_000)));
        for car_ad in car_ads(size) {
            repository.save(&car_ad).expect("save succeeds");
        }

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(repository.listings(&[&by_price]).expect("listing succeeds")))
        });
    }

    group.finish();
}

/// Rendering the listing statement for a typical search.
fn bench_sql_translation(c: &mut Criterion) {
    let by_manufacturer = CarAdByManufacturerSpecification::new(Some("Audi".into()));
    let by_price = CarAdByPricePerDaySpecification::new(Some(50), Some(150));

    c.bench_function("car_ad_listing_query", |b| {
        b.iter(|| {
            let specifications: [&dyn Specification<CarAd>; 2] = [&by_manufacturer, &by_price];
            black_box(car_ad_listing_query(&specifications, ListingLimit::default()))
        })
    });
}

criterion_group!(
    benches,
    bench_filter_by,
    bench_repository_listings,
    bench_sql_translation
);
criterion_main!(benches);
