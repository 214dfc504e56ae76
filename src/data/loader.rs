//! CSV Data Loader Module
//! Reads the degree distribution series and the metrics table rows.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("{path:?}: row {row}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load a two-column numeric CSV as an ordered (K, Frequency) series.
///
/// Row order is preserved; duplicate K values are allowed. Columns past the
/// second are ignored, a missing or non-numeric cell is a parse error.
pub fn load_series(path: &Path) -> Result<Vec<(f64, f64)>, LoaderError> {
    let mut reader = open_reader(path)?;

    let mut series = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let k = parse_cell(&record, path, row, 0)?;
        let frequency = parse_cell(&record, path, row, 1)?;
        series.push((k, frequency));
    }
    Ok(series)
}

/// Load a CSV as rows of verbatim string cells.
///
/// No type conversion and no shape validation; ragged rows come back exactly
/// as they appear in the file.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>, LoaderError> {
    let mut reader = open_reader(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

fn parse_cell(
    record: &StringRecord,
    path: &Path,
    row: usize,
    column: usize,
) -> Result<f64, LoaderError> {
    let value = record.get(column).unwrap_or("");
    value.trim().parse::<f64>().map_err(|_| LoaderError::Parse {
        path: path.to_path_buf(),
        row,
        column,
        value: value.to_string(),
    })
}
