// src/analysis/county.rs
use std::collections::BTreeMap;

use crate::data::Dataset;

/// Mean structure length (ft) per county, ascending by county name.
pub type CountyAggregate = BTreeMap<String, f64>;

/// Mean structure length for each selected county. Counties without any
/// row carrying a length are left out.
pub fn mean_length_by_county(dataset: &Dataset, counties: &[String]) -> CountyAggregate {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in dataset.in_counties(counties) {
        if let Some(len) = r.structure_length {
            let e = sums.entry(r.county_label()).or_insert((0.0, 0));
            e.0 += len;
            e.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(county, (sum, n))| (s!(county), sum / n as f64))
        .collect()
}
