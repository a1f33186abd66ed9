//! Salary table configuration.
//!
//! A salary table file is a JSON object mapping role names to amounts.
//! Amounts may be numbers or strings; strings keep exact decimal precision.
//!
//! ```text
//! {
//!   "intern": 1200,
//!   "junior": "2600.50",
//!   "mid-level": 4100
//! }
//! ```
//!
//! Roles left out of the file have no salary; paying or reporting on them
//! fails with `UnknownRole`.

use crate::domain::employee::Role;
use crate::domain::salary::SalaryTable;
use crate::error::{Result, StaffrollError};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Loads a salary table from a JSON file.
pub fn load_salary_table<P: AsRef<Path>>(path: P) -> Result<SalaryTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StaffrollError::ConfigNotFound {
            path: path_str.clone(),
        },
        _ => StaffrollError::IoError(e),
    })?;

    let table = parse_salary_table(&content).map_err(|e| match e {
        StaffrollError::SerializationError(e) => StaffrollError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        },
        other => other,
    })?;

    let missing = table.missing_roles();
    if missing.is_empty() {
        info!(path = %path_str, "loaded salary table");
    } else {
        warn!(path = %path_str, ?missing, "salary table does not cover every role");
    }
    Ok(table)
}

/// Parses the JSON form of a salary table.
pub fn parse_salary_table(content: &str) -> Result<SalaryTable> {
    let entries: BTreeMap<Role, Decimal> = serde_json::from_str(content)?;
    SalaryTable::from_entries(entries)
}
