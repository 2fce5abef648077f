// src/analysis/top_n.rs
use std::cmp::Ordering;

use crate::data::{BridgeRecord, Dataset};

/// What the map tooltip and the Top-10 table show for one bridge.
#[derive(Clone, Debug, PartialEq)]
pub struct BridgeSummary {
    pub place: Option<String>,
    pub length: f64,
    pub age: Option<u32>,
}

/// The `n` longest bridges, longest first.
#[derive(Clone, Debug, Default)]
pub struct TopNSelection<'a> {
    pub records: Vec<&'a BridgeRecord>,
}

impl<'a> TopNSelection<'a> {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn summaries(&self) -> Vec<BridgeSummary> {
        self.records.iter().map(|r| summary(r)).collect()
    }

    /// The first `k` summaries, same order.
    pub fn top(&self, k: usize) -> Vec<BridgeSummary> {
        self.records.iter().take(k).map(|r| summary(r)).collect()
    }

    /// (longitude, latitude) per selected bridge; None where unknown.
    pub fn positions(&self) -> Vec<Option<(f64, f64)>> {
        self.records.iter().map(|r| r.position()).collect()
    }

    /// Mean (longitude, latitude) over the bridges that have both.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let (mut lon, mut lat, mut n) = (0.0, 0.0, 0usize);
        for (x, y) in self.records.iter().filter_map(|r| r.position()) {
            lon += x;
            lat += y;
            n += 1;
        }
        (n > 0).then(|| (lon / n as f64, lat / n as f64))
    }
}

fn summary(r: &BridgeRecord) -> BridgeSummary {
    BridgeSummary {
        place: r.place_name.clone(),
        length: r.structure_length.unwrap_or(0.0),
        age: r.age,
    }
}

/// Select the `n` records with the greatest structure length. Ties keep
/// file order; rows without a length are never selected, so the result
/// holds `min(n, rows with a length)` records.
pub fn top_longest(dataset: &Dataset, n: usize) -> TopNSelection<'_> {
    let mut ranked: Vec<(&BridgeRecord, f64)> = dataset
        .iter()
        .filter_map(|r| r.structure_length.map(|len| (r, len)))
        .collect();

    // Stable: equal lengths stay in dataset order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);

    TopNSelection { records: ranked.into_iter().map(|(r, _)| r).collect() }
}
