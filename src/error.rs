use crate::domain::employee::Role;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffrollError {
    #[error("No salary configured for role '{role}'")]
    UnknownRole { role: Role },
    #[error("Salary for role '{role}' must not be negative, got {amount}")]
    InvalidSalary { role: Role, amount: Decimal },
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError { path: String, message: String },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, StaffrollError>;
