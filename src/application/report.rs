use crate::domain::employee::{Balance, Role};
use crate::domain::roster::Roster;
use crate::domain::salary::SalaryCalculator;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// One line of the payroll report.
///
/// Field order here is the field order in the serialized report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub role: Role,
    pub salary: Balance,
}

/// Projects a roster through the salary calculator.
///
/// Reporting never changes balances; the salary in each entry is what the
/// employee would be paid, not what they have been paid.
pub struct ReportGenerator {
    calculator: SalaryCalculator,
}

impl ReportGenerator {
    pub fn new(calculator: SalaryCalculator) -> Self {
        Self { calculator }
    }

    /// Returns one entry per employee, in roster order.
    ///
    /// Fails on the first employee whose role has no salary.
    pub fn generate(&self, roster: &Roster) -> Result<Vec<ReportEntry>> {
        let entries = roster
            .iter()
            .map(|employee| -> Result<ReportEntry> {
                Ok(ReportEntry {
                    name: employee.name.clone(),
                    role: employee.role,
                    salary: self.calculator.calculate(employee.role)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(entries = entries.len(), "generated report");
        Ok(entries)
    }

    /// The report as a compact JSON array.
    pub fn generate_json(&self, roster: &Roster) -> Result<String> {
        Ok(serde_json::to_string(&self.generate(roster)?)?)
    }

    pub fn generate_json_pretty(&self, roster: &Roster) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.generate(roster)?)?)
    }

    /// Sum of the salaries in a report.
    pub fn total(entries: &[ReportEntry]) -> Balance {
        entries
            .iter()
            .fold(Balance::ZERO, |total, entry| total + entry.salary)
    }
}
