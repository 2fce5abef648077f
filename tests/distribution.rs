// tests/distribution.rs
use ga_bridges::analysis::summarize;
use ga_bridges::data::{BridgeRecord, CategoryField, Dataset};

fn with_materials(materials: &[Option<&str>]) -> Dataset {
    let records = materials
        .iter()
        .enumerate()
        .map(|(i, m)| BridgeRecord {
            main_span_material: m.map(String::from),
            ..BridgeRecord::new(i.to_string())
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn mix() -> Dataset {
    // 8 Steel, 1 Wood, 1 Concrete
    let mut m = vec![Some("Steel"); 8];
    m.insert(3, Some("Wood"));
    m.push(Some("Concrete"));
    with_materials(&m)
}

#[test]
fn counts_sum_to_total() {
    let ds = with_materials(&[
        Some("Steel"), Some("Concrete"), Some("Steel"), None, Some("Wood"),
        Some("Prestressed concrete"), Some("Steel"), Some("Concrete"), None, Some("Masonry"),
    ]);
    for t in [0.0, 6.0, 15.0, 50.0, 100.0, 250.0] {
        assert_eq!(summarize(&ds, CategoryField::MainSpanMaterial, t).total(), ds.len(), "threshold {t}");
    }
}

#[test]
fn small_categories_merge_into_other() {
    let s = summarize(&mix(), CategoryField::MainSpanMaterial, 15.0);
    assert_eq!(s.categories, vec![("Steel".to_string(), 8)]);
    assert_eq!(s.other, 2);
}

#[test]
fn share_equal_to_threshold_stays_named() {
    let s = summarize(&mix(), CategoryField::MainSpanMaterial, 10.0);
    // Ties keep first-seen order: Wood appears before Concrete
    assert_eq!(
        s.categories,
        vec![("Steel".to_string(), 8), ("Wood".to_string(), 1), ("Concrete".to_string(), 1)]
    );
    assert_eq!(s.other, 0);
    assert_eq!(s.labeled("Other Span Material").len(), 3);
}

#[test]
fn everything_below_threshold_is_one_other_bucket() {
    let s = summarize(&mix(), CategoryField::MainSpanMaterial, 90.0);
    assert!(s.categories.is_empty());
    assert_eq!(s.other, 10);
    assert_eq!(s.labeled("Other"), vec![("Other".to_string(), 10)]);
}

#[test]
fn threshold_of_100_or_more_collapses_all() {
    let single = with_materials(&[Some("Steel"); 4]);
    for t in [100.0, 101.0] {
        let s = summarize(&single, CategoryField::MainSpanMaterial, t);
        assert!(s.categories.is_empty());
        assert_eq!(s.other, 4);
    }
}

#[test]
fn missing_values_count_as_no_data_category() {
    let ds = with_materials(&[None, None, Some("Steel")]);
    let s = summarize(&ds, CategoryField::MainSpanMaterial, 6.0);
    assert_eq!(s.categories[0], ("No Data Present".to_string(), 2));
}

#[test]
fn empty_dataset_gives_empty_summary() {
    let s = summarize(&Dataset::default(), CategoryField::MainSpanMaterial, 6.0);
    assert!(s.is_empty());
    assert!(s.labeled("Other").is_empty());
}
