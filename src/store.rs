// src/store.rs
//
// Loader: reads the bridges CSV once at startup into a typed Dataset.
// Header names are the literal ones from the source file. Empty cells become
// None; numeric cells that don't parse are treated the same way.

use std::{fs::File, io::Read, path::{Path, PathBuf}, time::Instant};

use serde::Deserialize;
use thiserror::Error;

use crate::data::{BridgeRecord, Dataset, DatasetError};

pub const COL_STRUCTURE_NUMBER: &str = "Structure Number";
pub const COL_COUNTY: &str = "County Name";
pub const COL_MATERIAL: &str = "43A - Main Span Material";
pub const COL_YEAR_RECONSTRUCTED: &str = "106 - Year Reconstructed";
pub const COL_YEAR_BUILT: &str = "Year Built";
pub const COL_LENGTH: &str = "49 - Structure Length (ft.)";
pub const COL_LATITUDE: &str = "16 - Latitude (decimal)";
pub const COL_LONGITUDE: &str = "17 - Longitude (decimal)";
pub const COL_PLACE: &str = "City - InfoBridge Place Name";
pub const COL_AGE: &str = "Bridge Age (yr)";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_STRUCTURE_NUMBER,
    COL_COUNTY,
    COL_MATERIAL,
    COL_YEAR_RECONSTRUCTED,
    COL_YEAR_BUILT,
    COL_LENGTH,
    COL_LATITUDE,
    COL_LONGITUDE,
    COL_PLACE,
    COL_AGE,
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column {0:?}")]
    MissingColumn(String),

    #[error("Row at line {line} has {found} fields, expected {expected}")]
    RowWidth { line: u64, expected: usize, found: usize },

    #[error("Row at line {line} has no structure number")]
    MissingId { line: u64 },

    #[error("Duplicate structure number {id:?} at line {line}")]
    DuplicateId { id: String, line: u64 },
}

/// Cells exactly as they sit in the file. Everything optional; the typed
/// conversion happens in `into_record`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Structure Number")]
    structure_number: Option<String>,
    #[serde(rename = "County Name")]
    county: Option<String>,
    #[serde(rename = "43A - Main Span Material")]
    material: Option<String>,
    #[serde(rename = "106 - Year Reconstructed")]
    year_reconstructed: Option<String>,
    #[serde(rename = "Year Built")]
    year_built: Option<String>,
    #[serde(rename = "49 - Structure Length (ft.)")]
    length: Option<String>,
    #[serde(rename = "16 - Latitude (decimal)")]
    latitude: Option<String>,
    #[serde(rename = "17 - Longitude (decimal)")]
    longitude: Option<String>,
    #[serde(rename = "City - InfoBridge Place Name")]
    place: Option<String>,
    #[serde(rename = "Bridge Age (yr)")]
    age: Option<String>,
}

impl RawRow {
    fn into_record(self, line: u64) -> Result<BridgeRecord, LoadError> {
        let structure_number = text(self.structure_number).ok_or(LoadError::MissingId { line })?;
        Ok(BridgeRecord {
            structure_number,
            county: text(self.county),
            main_span_material: text(self.material),
            year_reconstructed: year(self.year_reconstructed),
            year_built: year(self.year_built),
            structure_length: number(self.length),
            latitude: number(self.latitude),
            longitude: number(self.longitude),
            place_name: text(self.place),
            age: number(self.age).filter(|v| *v >= 0.0).map(|v| v.round() as u32),
        })
    }
}

/// Load the dataset from a file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let started = Instant::now();
    let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let ds = load_from_reader(file)?;
    logf!(
        "Load: {} bridges from {} in {} ms",
        ds.len(),
        path.display(),
        started.elapsed().as_millis()
    );
    Ok(ds)
}

/// Load from any CSV source (file, in-memory buffer).
pub fn load_from_reader<R: Read>(rdr: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    for &col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(s!(col)));
        }
    }

    let mut records = Vec::new();
    let mut lines = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        // Short rows are padded with None; long ones would shift cells
        if row.len() > headers.len() {
            return Err(LoadError::RowWidth { line, expected: headers.len(), found: row.len() });
        }
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(raw.into_record(line)?);
        lines.push(line);
    }
    logd!("Load: parsed {} rows", records.len());

    Dataset::from_records(records).map_err(|e| match e {
        DatasetError::DuplicateId { id, row } => LoadError::DuplicateId {
            id,
            line: lines.get(row).copied().unwrap_or(0),
        },
    })
}

/* ---------------- Cell conversion ---------------- */

fn text(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn number(cell: Option<String>) -> Option<f64> {
    let s = text(cell)?;
    s.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer year; "1990.0" (pandas float export) truncates like `astype(int)`.
fn year(cell: Option<String>) -> Option<i32> {
    let v = number(cell)?.trunc();
    (v >= i32::MIN as f64 && v <= i32::MAX as f64).then_some(v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> { Some(s.to_string()) }

    #[test]
    fn numeric_cells() {
        assert_eq!(number(cell(" 12.5 ")), Some(12.5));
        assert_eq!(number(cell("1,234")), Some(1234.0));
        assert_eq!(number(cell("")), None);
        assert_eq!(number(cell("No Data Present")), None);
        assert_eq!(number(None), None);
    }

    #[test]
    fn year_cells() {
        assert_eq!(year(cell("1990")), Some(1990));
        assert_eq!(year(cell("1990.0")), Some(1990));
        assert_eq!(year(cell("n/a")), None);
    }

    #[test]
    fn text_cells() {
        assert_eq!(text(cell("  Fulton ")), Some(s!("Fulton")));
        assert_eq!(text(cell("   ")), None);
    }
}
