use super::employee::{Employee, EmployeeId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

const DEFAULT_BASE_SALARY: Decimal = dec!(1000);

/// The ordered list of people currently employed.
///
/// Insertion order is preserved and is the order reports are produced in.
/// Entries are matched by [`EmployeeId`], never by name or role.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    base_salary: Decimal,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::with_base_salary(DEFAULT_BASE_SALARY)
    }

    /// Creates an empty roster carrying an informational base salary.
    ///
    /// The base salary is logged when the roster is assembled but plays no
    /// part in what the calculator pays.
    pub fn with_base_salary(base_salary: Decimal) -> Self {
        Self {
            employees: Vec::new(),
            base_salary,
        }
    }

    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Appends an employee. Hiring the same employee twice keeps both entries.
    pub fn hire(&mut self, employee: Employee) -> EmployeeId {
        let id = employee.id;
        debug!(employee = %id, name = %employee.name, role = %employee.role, "hired");
        self.employees.push(employee);
        id
    }

    /// Removes every entry for `id` and returns how many were removed.
    ///
    /// Firing someone who is not on the roster does nothing.
    pub fn fire(&mut self, id: &EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != *id);
        let removed = before - self.employees.len();
        debug!(employee = %id, removed, "fired");
        removed
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == *id)
    }

    pub fn get_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == *id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<T: IntoIterator<Item = Employee>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for employee in iter {
            roster.hire(employee);
        }
        roster
    }
}
