// src/present/table.rs
//! TableData: the small tables the dashboard shows (county pivot, Top-10).
//!
//! Same shape for the on-screen grid, the clipboard and the CSV export, so
//! what the user copies is exactly what they see.

use std::io::Write;

/// Header row plus string cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self { headers: headers.iter().map(|h| s!(*h)).collect(), rows }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn ncols(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.first().map(|r| r.len()).unwrap_or(0)
        } else {
            self.headers.len()
        }
    }

    pub fn nrows(&self) -> usize { self.rows.len() }

    /// Write headers and rows with the given delimiter.
    pub fn write_delimited<W: Write>(&self, w: W, delim: u8) -> Result<(), csv::Error> {
        let mut out = csv::WriterBuilder::new().delimiter(delim).from_writer(w);
        out.write_record(&self.headers)?;
        for r in &self.rows {
            out.write_record(r)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Whole table as text (CSV with `b','`, TSV with `b'\t'`).
    pub fn to_delimited_string(&self, delim: u8) -> String {
        let mut buf: Vec<u8> = Vec::new();
        if let Err(e) = self.write_delimited(&mut buf, delim) {
            loge!("Table: serialise failed: {e}");
        }
        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        }
    }
}
