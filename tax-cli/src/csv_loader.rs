//! CSV loader for batches of taxpayer profiles.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header
//! names are case-sensitive.
//!
//! | Column                | Required | Type    | Notes                                      |
//! |-----------------------|----------|---------|--------------------------------------------|
//! | `name`                | no       | string  | Shown in the summary header                |
//! | `filing_status`       | yes      | string  | `S`, `M`/`MFJ`, `H`/`HOH` (any case)       |
//! | `salary`              | yes      | decimal | Must not be negative                       |
//! | `short_term_gain`     | no       | decimal | Signed; empty cell means 0                 |
//! | `long_term_gain`      | no       | decimal | Signed; empty cell means 0                 |
//! | `standard_deduction`  | no       | decimal | Empty cell means the filing-status default |
//! | `qualifying_children` | no       | integer | Empty cell means 0                         |
//! | `withholding`         | no       | decimal | Empty cell means 0                         |
//!
//! ### Example
//!
//! ```csv
//! name,filing_status,salary,short_term_gain,long_term_gain,standard_deduction,qualifying_children,withholding
//! Ada,S,100000.00,,,,0,0
//! Ben,MFJ,300000.00,0,50000.00,31500.00,2,40000.00
//! ```
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{FilingStatus, ProfileError, TaxYearConfig, TaxpayerProfile};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: Option<String>,
    filing_status: String,
    salary: Decimal,
    short_term_gain: Option<Decimal>,
    long_term_gain: Option<Decimal>,
    standard_deduction: Option<Decimal>,
    qualifying_children: Option<u32>,
    withholding: Option<Decimal>,
}

/// A profile read from one CSV row, with its optional display name.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub name: Option<String>,
    pub profile: TaxpayerProfile,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing required column, or a type mismatch.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is the 1-based data row (the header is not counted).
    #[error("unrecognised filing status '{status}' on row {row}")]
    InvalidFilingStatus { status: String, row: usize },

    #[error("invalid profile on row {row}: {source}")]
    InvalidProfile {
        #[source]
        source: ProfileError,
        row: usize,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
    config: &TaxYearConfig,
) -> Result<LoadedProfile, CsvLoadError> {
    let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
        CsvLoadError::InvalidFilingStatus {
            status: row.filing_status.clone(),
            row: row_number,
        }
    })?;

    let profile = TaxpayerProfile {
        filing_status,
        salary: row.salary,
        short_term_gain: row.short_term_gain.unwrap_or_default(),
        long_term_gain: row.long_term_gain.unwrap_or_default(),
        standard_deduction: row
            .standard_deduction
            .unwrap_or_else(|| config.standard_deduction(filing_status)),
        qualifying_children: row.qualifying_children.unwrap_or_default(),
        withholding: row.withholding.unwrap_or_default(),
    };
    profile
        .validate()
        .map_err(|source| CsvLoadError::InvalidProfile {
            source,
            row: row_number,
        })?;

    let name = row.name.filter(|n| !n.is_empty());
    Ok(LoadedProfile { name, profile })
}

/// Parses CSV text into profiles, in file order.
///
/// Missing standard deductions are filled in from `config`.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   field cannot be deserialised.
/// * [`CsvLoadError::InvalidFilingStatus`] for an unknown status code.
/// * [`CsvLoadError::InvalidProfile`] for a negative salary, deduction,
///   or withholding, or an amount beyond the accepted range.
pub fn load_from_str(
    input: &str,
    config: &TaxYearConfig,
) -> Result<Vec<LoadedProfile>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1, config)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    config: &TaxYearConfig,
) -> Result<Vec<LoadedProfile>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, config)
}
