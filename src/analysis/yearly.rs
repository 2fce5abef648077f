// src/analysis/yearly.rs
use std::collections::BTreeMap;

use crate::data::{BridgeRecord, Dataset, YearField};

/// Count per year, ascending. Years with no bridges are absent, not zero.
pub type YearlyCounts = BTreeMap<i32, usize>;

/// Count records per `year_field`, keeping only years in
/// `range_start..=range_end`. Records without a usable year are skipped.
pub fn yearly_counts<'a, I>(records: I, year_field: YearField, range_start: i32, range_end: i32) -> YearlyCounts
where
    I: IntoIterator<Item = &'a BridgeRecord>,
{
    let mut counts = YearlyCounts::new();
    if range_start > range_end { return counts; }

    for y in records.into_iter().filter_map(|r| year_field.value(r)) {
        if (range_start..=range_end).contains(&y) {
            *counts.entry(y).or_insert(0) += 1;
        }
    }
    counts
}

/// Built-year counts for one county, from `start` up to the latest built
/// year present in that county. Empty if the county has no built years.
pub fn built_years_for_county(dataset: &Dataset, county: &str, start: i32) -> YearlyCounts {
    let rows: Vec<&BridgeRecord> = dataset.iter().filter(|r| r.county_label() == county).collect();

    let Some(latest) = rows.iter().filter_map(|r| r.year_built).max() else {
        return YearlyCounts::new();
    };
    yearly_counts(rows, YearField::Built, start, latest)
}
