use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::sync::atomic::{AtomicU64, Ordering};

/// A monetary value held by an employee.
///
/// Wraps `rust_decimal::Decimal` so salaries and balances never go through
/// binary floating point arithmetic. Serialized as a decimal string, which
/// keeps every digit of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// The closed set of positions an employee can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Intern,
    Junior,
    MidLevel,
    Senior,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Intern, Role::Junior, Role::MidLevel, Role::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Intern => "intern",
            Role::Junior => "junior",
            Role::MidLevel => "mid-level",
            Role::Senior => "senior",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NEXT_EMPLOYEE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one employee for the lifetime of the process.
///
/// Minted by [`Employee::new`]; never derived from the name or role, so two
/// people with the same name stay distinct. A cloned `Employee` keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    fn next() -> Self {
        Self(NEXT_EMPLOYEE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: Role,
    /// Last amount paid. Starts at zero and is overwritten, never accumulated.
    pub balance: Balance,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: EmployeeId::next(),
            name: name.into(),
            role,
            balance: Balance::ZERO,
        }
    }
}
