//! Launch-records CSV loader.
//!
//! The file is read once at startup. Any missing column or malformed value is
//! a hard error naming the file, line and column, so that no `NaN` or garbage
//! ever reaches the charts.

use log::{debug, info};
use std::fs;
use std::path::Path;

use super::checksum::calculate_checksum;
use crate::models::{LaunchDataset, LaunchRecord, OutcomeClass};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Columns that must be present in the header. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] =
    [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

/// Failure to load the launch dataset. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid value '{value}' for column '{column}' in {path} at line {line}: {reason}")]
    InvalidValue {
        path: String,
        line: u64,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Dataset {path} contains no launch records")]
    Empty { path: String },
}

impl DatasetLoadError {
    fn invalid(
        path: &str,
        line: u64,
        column: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        DatasetLoadError::InvalidValue {
            path: path.to_string(),
            line,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Load the launch dataset from a CSV file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<LaunchDataset, DatasetLoadError> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| DatasetLoadError::Io {
        path: source.clone(),
        source: e,
    })?;

    let dataset = parse_dataset(&content, &source)?;
    info!(
        "Loaded {} launch records across {} sites from {}",
        dataset.len(),
        dataset.sites().len(),
        source
    );
    Ok(dataset)
}

/// Parse CSV content into a dataset. `source` names the input in errors.
pub fn parse_dataset(content: &str, source: &str) -> Result<LaunchDataset, DatasetLoadError> {
    let csv_error = |e: csv::Error| DatasetLoadError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == name)
            .ok_or_else(|| DatasetLoadError::MissingColumn {
                path: source.to_string(),
                column: name.to_string(),
            })
    };

    let site_idx = column_index(SITE_COLUMN)?;
    let payload_idx = column_index(PAYLOAD_COLUMN)?;
    let class_idx = column_index(CLASS_COLUMN)?;
    let booster_idx = column_index(BOOSTER_COLUMN)?;

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        // Header is line 1.
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(row_number as u64 + 2);
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let site = field(site_idx);
        if site.is_empty() {
            return Err(DatasetLoadError::invalid(
                source,
                line,
                SITE_COLUMN,
                site,
                "launch site is empty",
            ));
        }

        let payload_raw = field(payload_idx);
        let payload_mass_kg = parse_payload(payload_raw).map_err(|reason| {
            DatasetLoadError::invalid(source, line, PAYLOAD_COLUMN, payload_raw, reason)
        })?;

        let class_raw = field(class_idx);
        let outcome = parse_outcome(class_raw).map_err(|reason| {
            DatasetLoadError::invalid(source, line, CLASS_COLUMN, class_raw, reason)
        })?;

        records.push(LaunchRecord::new(
            site,
            payload_mass_kg,
            outcome,
            field(booster_idx),
        ));
    }

    if records.is_empty() {
        return Err(DatasetLoadError::Empty {
            path: source.to_string(),
        });
    }

    debug!("Parsed {} rows from {}", records.len(), source);
    Ok(LaunchDataset::new(records).with_checksum(calculate_checksum(content)))
}

fn parse_payload(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|e| format!("not a number ({})", e))?;
    if !value.is_finite() {
        return Err("payload mass must be finite".to_string());
    }
    if value < 0.0 {
        return Err("payload mass must not be negative".to_string());
    }
    Ok(value)
}

/// Accepts `0`/`1` in integer or float notation.
fn parse_outcome(raw: &str) -> Result<OutcomeClass, String> {
    let value: f64 = raw
        .parse()
        .map_err(|e| format!("not a number ({})", e))?;
    if value == 0.0 {
        Ok(OutcomeClass::Failure)
    } else if value == 1.0 {
        Ok(OutcomeClass::Success)
    } else {
        Err("outcome class must be 0 or 1".to_string())
    }
}
