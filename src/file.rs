// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::present::TableData;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Write `table` as CSV. A path ending in a separator (or naming an existing
/// directory) gets `default_filename` appended. Returns the path written.
pub fn export_table(
    table: &TableData,
    user_path: &str,
    default_filename: &str,
) -> Result<PathBuf, ExportError> {
    let path = resolve_single_out_path(user_path, default_filename)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let out = BufWriter::new(File::create(&path)?);
    table.write_delimited(out, b',')?;
    logf!("Export: {} rows → {}", table.nrows(), path.display());
    Ok(path)
}

pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, ExportError> {
    let user_o = user_o.trim();
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
