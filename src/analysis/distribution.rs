// src/analysis/distribution.rs
use std::collections::HashMap;

use crate::data::{CategoryField, Dataset};

/// Category counts with the small ones folded into `other`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistributionSummary {
    /// Categories at or above the threshold, most frequent first.
    pub categories: Vec<(String, usize)>,
    /// Sum of every category strictly below the threshold.
    pub other: usize,
}

impl DistributionSummary {
    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, n)| n).sum::<usize>() + self.other
    }

    pub fn is_empty(&self) -> bool { self.total() == 0 }

    /// Named categories followed by the Other bucket under `other_label`.
    /// The bucket is skipped when it is empty.
    pub fn labeled(&self, other_label: &str) -> Vec<(String, usize)> {
        let mut out = self.categories.clone();
        if self.other > 0 {
            out.push((s!(other_label), self.other));
        }
        out
    }
}

/// Frequency of each distinct value of `field`, descending by count
/// (ties keep first-seen order). Categories whose share is below
/// `threshold_pct` percent are merged into `other`; a threshold of 100 or
/// more merges everything.
pub fn summarize(dataset: &Dataset, field: CategoryField, threshold_pct: f64) -> DistributionSummary {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in dataset {
        let v = field.value(r);
        let n = counts.entry(v).or_insert(0);
        if *n == 0 { order.push(v); }
        *n += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|v| (v, counts[v])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let total = dataset.len() as f64;
    let collapse_all = threshold_pct >= 100.0;

    let mut summary = DistributionSummary::default();
    for (label, n) in ranked {
        let share = n as f64 * 100.0 / total;
        if collapse_all || share < threshold_pct {
            summary.other += n;
        } else {
            summary.categories.push((s!(label), n));
        }
    }
    summary
}
