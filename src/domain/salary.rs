use super::employee::{Balance, Role};
use crate::error::{Result, StaffrollError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable mapping from role to monthly salary.
///
/// The default table covers every [`Role`]. Tables loaded from configuration
/// may leave roles out; looking those up fails with
/// [`StaffrollError::UnknownRole`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryTable {
    salaries: BTreeMap<Role, Decimal>,
}

impl SalaryTable {
    /// Builds a table from `(role, amount)` pairs. Later pairs win.
    ///
    /// Fails with [`StaffrollError::InvalidSalary`] on a negative amount.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, Decimal)>,
    {
        let mut salaries = BTreeMap::new();
        for (role, amount) in entries {
            if amount < Decimal::ZERO {
                return Err(StaffrollError::InvalidSalary { role, amount });
            }
            salaries.insert(role, amount);
        }
        Ok(Self { salaries })
    }

    pub fn get(&self, role: Role) -> Option<Decimal> {
        self.salaries.get(&role).copied()
    }

    /// Roles of the enumeration that have no entry.
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| !self.salaries.contains_key(role))
            .collect()
    }

    pub fn is_total(&self) -> bool {
        self.missing_roles().is_empty()
    }
}

impl Default for SalaryTable {
    fn default() -> Self {
        Self {
            salaries: BTreeMap::from([
                (Role::Intern, dec!(1000)),
                (Role::Junior, dec!(2500)),
                (Role::MidLevel, dec!(4000)),
                (Role::Senior, dec!(7000)),
            ]),
        }
    }
}

/// Looks salaries up in a shared [`SalaryTable`].
///
/// Cloning is cheap; the payment processor and the report generator hold
/// clones of the same calculator so both always agree on amounts.
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    table: Arc<SalaryTable>,
}

impl SalaryCalculator {
    pub fn new(table: SalaryTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn calculate(&self, role: Role) -> Result<Balance> {
        self.table
            .get(role)
            .map(Balance::new)
            .ok_or(StaffrollError::UnknownRole { role })
    }
}
