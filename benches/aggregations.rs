// benches/aggregations.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ga_bridges::{
    analysis::{mean_length_by_county, summarize, top_longest, yearly_counts},
    data::{BridgeRecord, CategoryField, Dataset, YearField},
};

const COUNTIES: &[&str] = &["Appling", "Bibb", "Cobb", "Fulton", "Gwinnett", "Ware"];
const MATERIALS: &[&str] = &["Concrete", "Steel", "Prestressed concrete", "Wood", "Masonry"];

// ~size of the Georgia file
fn synthetic(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| BridgeRecord {
            county: Some(COUNTIES[i % COUNTIES.len()].to_string()),
            main_span_material: Some(MATERIALS[(i * 7) % MATERIALS.len()].to_string()),
            year_built: Some(1900 + (i % 120) as i32),
            year_reconstructed: (i % 3 == 0).then_some(1970 + (i % 50) as i32),
            structure_length: Some(((i * 7919) % 5000) as f64 + 20.0),
            latitude: Some(30.5 + (i % 500) as f64 / 100.0),
            longitude: Some(-85.5 + (i % 400) as f64 / 100.0),
            place_name: Some(format!("Place {i}")),
            age: Some((i % 120) as u32),
            ..BridgeRecord::new(i.to_string())
        })
        .collect();
    Dataset::from_records(records).expect("unique ids")
}

fn bench_aggregations(c: &mut Criterion) {
    let ds = synthetic(10_000);
    let selected: Vec<String> = COUNTIES[..2].iter().map(|s| s.to_string()).collect();

    c.bench_function("top_longest_500", |b| {
        b.iter(|| black_box(top_longest(black_box(&ds), 500).len()))
    });

    c.bench_function("summarize_material", |b| {
        b.iter(|| black_box(summarize(black_box(&ds), CategoryField::MainSpanMaterial, 6.0)))
    });

    c.bench_function("yearly_reconstructed", |b| {
        b.iter(|| black_box(yearly_counts(black_box(&ds), YearField::Reconstructed, 1975, 2022)))
    });

    c.bench_function("mean_length_two_counties", |b| {
        b.iter(|| black_box(mean_length_by_county(black_box(&ds), &selected)))
    });
}

criterion_group!(benches, bench_aggregations);
criterion_main!(benches);
