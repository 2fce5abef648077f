// src/analysis/mod.rs
//
// Pure aggregations over the loaded Dataset. Each call derives a fresh
// result; nothing here holds state between page renders.

pub mod county;
pub mod distribution;
pub mod top_n;
pub mod yearly;

pub use county::{mean_length_by_county, CountyAggregate};
pub use distribution::{summarize, DistributionSummary};
pub use top_n::{top_longest, BridgeSummary, TopNSelection};
pub use yearly::{built_years_for_county, yearly_counts, YearlyCounts};
