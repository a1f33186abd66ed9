use crate::domain::employee::{Employee, Role};
use crate::error::{Result, StaffrollError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    role: Role,
}

/// Reads employees from a `name,role` CSV source.
///
/// Whitespace around fields is trimmed. Each row becomes a new employee with
/// its own id and a zero balance.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RosterReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one employee per row.
    pub fn employees(self) -> impl Iterator<Item = Result<Employee>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|row: RosterRow| Employee::new(row.name, row.role))
                .map_err(StaffrollError::from)
        })
    }
}
