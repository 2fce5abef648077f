// tests/yearly_counts.rs
use ga_bridges::analysis::{built_years_for_county, yearly_counts, YearlyCounts};
use ga_bridges::data::{BridgeRecord, Dataset, YearField};

fn built(id: &str, county: &str, year: Option<i32>) -> BridgeRecord {
    BridgeRecord {
        county: Some(county.to_string()),
        year_built: year,
        ..BridgeRecord::new(id)
    }
}

fn dataset(records: Vec<BridgeRecord>) -> Dataset {
    Dataset::from_records(records).unwrap()
}

#[test]
fn counts_per_year_within_range() {
    let ds = dataset(vec![
        built("a", "Fulton", Some(1990)),
        built("b", "Fulton", Some(1990)),
        built("c", "Fulton", Some(1991)),
        built("d", "Fulton", Some(1800)),
    ]);
    let counts = yearly_counts(&ds, YearField::Built, 1990, 1991);
    assert_eq!(counts, YearlyCounts::from([(1990, 2), (1991, 1)]));
}

#[test]
fn missing_years_are_skipped_and_gaps_not_filled() {
    let ds = dataset(vec![
        built("a", "Fulton", Some(1980)),
        built("b", "Fulton", None),
        built("c", "Fulton", Some(1983)),
    ]);
    let counts = yearly_counts(&ds, YearField::Built, 1975, 2022);
    assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![1980, 1983]);
    assert!(!counts.contains_key(&1981));
}

#[test]
fn uses_the_requested_year_field() {
    let r = BridgeRecord {
        year_built: Some(1950),
        year_reconstructed: Some(2001),
        ..BridgeRecord::new("x")
    };
    let ds = dataset(vec![r]);
    assert_eq!(yearly_counts(&ds, YearField::Reconstructed, 1975, 2022), YearlyCounts::from([(2001, 1)]));
    assert!(yearly_counts(&ds, YearField::Built, 1975, 2022).is_empty());
}

#[test]
fn never_outside_bounds() {
    let records = (0..300)
        .map(|i| built(&i.to_string(), "Fulton", Some(1850 + (i % 200))))
        .collect();
    let ds = dataset(records);
    let counts = yearly_counts(&ds, YearField::Built, 1975, 2022);
    assert!(counts.keys().all(|y| (1975..=2022).contains(y)));
    assert!(counts.values().all(|&n| n > 0));
}

#[test]
fn inverted_range_is_empty() {
    let ds = dataset(vec![built("a", "Fulton", Some(2000))]);
    assert!(yearly_counts(&ds, YearField::Built, 2022, 1975).is_empty());
}

#[test]
fn county_series_runs_to_latest_year_in_that_county() {
    let ds = dataset(vec![
        built("a", "Fulton", Some(1880)),
        built("b", "Fulton", Some(1900)),
        built("c", "Fulton", Some(2010)),
        built("d", "Fulton", Some(2010)),
        built("e", "Cobb", Some(2020)),
        built("f", "Fulton", None),
    ]);
    let counts = built_years_for_county(&ds, "Fulton", 1885);
    assert_eq!(counts, YearlyCounts::from([(1900, 1), (2010, 2)]));
}

#[test]
fn county_without_built_years_is_empty() {
    let ds = dataset(vec![built("a", "Fulton", None), built("b", "Cobb", Some(1990))]);
    assert!(built_years_for_county(&ds, "Fulton", 1885).is_empty());
    assert!(built_years_for_county(&ds, "Nowhere", 1885).is_empty());
}
