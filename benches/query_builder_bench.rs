/// Property search query assembly benchmarks
/// Measures building SQL text and bind lists for growing filter sets
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

use lightbnb_store::dto::PropertySearchFilter;
use lightbnb_store::infrastructure::persistence::PropertyQuery;

fn filters() -> Vec<(&'static str, PropertySearchFilter)> {
    vec![
        ("none", PropertySearchFilter::default()),
        (
            "city",
            PropertySearchFilter {
                city: Some("Vancouver".to_string()),
                ..PropertySearchFilter::default()
            },
        ),
        (
            "owner_rating",
            PropertySearchFilter {
                owner_id: Some(1),
                minimum_rating: Some(4.0),
                ..PropertySearchFilter::default()
            },
        ),
        (
            "all",
            PropertySearchFilter {
                city: Some("Vancouver".to_string()),
                owner_id: Some(1),
                minimum_price_per_night: Some(50.0),
                maximum_price_per_night: Some(200.0),
                minimum_rating: Some(3.5),
            },
        ),
    ]
}

fn query_builder_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("property_query_build");
    group.measurement_time(Duration::from_secs(5));

    for (name, filter) in filters() {
        group.bench_with_input(BenchmarkId::new("build", name), &filter, |b, f| {
            b.iter(|| PropertyQuery::build(black_box(f), black_box(10)))
        });
    }

    group.finish();
}

// Falsy criteria must be skipped without cost
fn falsy_filter_benchmarks(c: &mut Criterion) {
    let filter = PropertySearchFilter {
        city: Some(String::new()),
        owner_id: Some(0),
        minimum_price_per_night: Some(0.0),
        maximum_price_per_night: Some(f64::NAN),
        minimum_rating: Some(0.0),
    };

    c.bench_function("property_query_build_falsy", |b| {
        b.iter(|| PropertyQuery::build(black_box(&filter), black_box(10)))
    });
}

criterion_group!(benches, query_builder_benchmarks, falsy_filter_benchmarks);
criterion_main!(benches);
