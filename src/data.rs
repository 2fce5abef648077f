// src/data.rs
//
// Typed bridge records and the read-only dataset the pages draw from.
//
// - BridgeRecord: one row, with every optional cell as an Option so the
//                 aggregations can never do arithmetic on a missing value.
// - Dataset: built once by the loader (src/store.rs) and only read after.
//            Rows keep file order; the id index is for lookups only.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::config::consts::NO_DATA;

/// One bridge, keyed by its structure number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BridgeRecord {
    pub structure_number: String,
    pub county: Option<String>,
    pub main_span_material: Option<String>,
    pub year_reconstructed: Option<i32>,
    pub year_built: Option<i32>,
    /// Feet
    pub structure_length: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place_name: Option<String>,
    /// Years
    pub age: Option<u32>,
}

impl BridgeRecord {
    pub fn new(structure_number: impl Into<String>) -> Self {
        Self { structure_number: structure_number.into(), ..Self::default() }
    }

    /// County as shown in the UI; missing counties group under the marker.
    pub fn county_label(&self) -> &str {
        self.county.as_deref().unwrap_or(NO_DATA)
    }

    pub fn place_label(&self) -> &str {
        self.place_name.as_deref().unwrap_or(NO_DATA)
    }

    /// (longitude, latitude) when both are known.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.longitude?, self.latitude?))
    }
}

/// Text columns a distribution can be computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryField {
    County,
    MainSpanMaterial,
    PlaceName,
}

impl CategoryField {
    pub fn value<'a>(&self, r: &'a BridgeRecord) -> &'a str {
        let v = match self {
            CategoryField::County => &r.county,
            CategoryField::MainSpanMaterial => &r.main_span_material,
            CategoryField::PlaceName => &r.place_name,
        };
        v.as_deref().unwrap_or(NO_DATA)
    }
}

/// The two independently tracked year columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearField {
    Reconstructed,
    Built,
}

impl YearField {
    pub fn value(&self, r: &BridgeRecord) -> Option<i32> {
        match self {
            YearField::Reconstructed => r.year_reconstructed,
            YearField::Built => r.year_built,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Duplicate structure number {id:?} (row {row})")]
    DuplicateId { id: String, row: usize },
}

/// All bridges, in file order. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<BridgeRecord>,
    by_id: HashMap<String, usize>,
}

impl Dataset {
    /// Build from records; structure numbers must be unique.
    /// `row` in the error is the 0-based position within `records`.
    pub fn from_records(records: Vec<BridgeRecord>) -> Result<Self, DatasetError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (row, r) in records.iter().enumerate() {
            if by_id.insert(r.structure_number.clone(), row).is_some() {
                return Err(DatasetError::DuplicateId { id: r.structure_number.clone(), row });
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[BridgeRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, BridgeRecord> { self.records.iter() }

    pub fn get(&self, structure_number: &str) -> Option<&BridgeRecord> {
        self.by_id.get(structure_number).map(|&ix| &self.records[ix])
    }

    /// Distinct county labels, ascending.
    pub fn counties(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.county_label()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// First `k` counties alphabetically; the County page's initial selection.
    pub fn default_counties(&self, k: usize) -> Vec<String> {
        self.counties().into_iter().take(k).collect()
    }

    /// Rows whose county label is one of `counties`.
    pub fn in_counties<'a>(
        &'a self,
        counties: &'a [String],
    ) -> impl Iterator<Item = &'a BridgeRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| counties.iter().any(|c| c == r.county_label()))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a BridgeRecord;
    type IntoIter = std::slice::Iter<'a, BridgeRecord>;

    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
