use crate::domain::employee::{Balance, Employee, EmployeeId};
use crate::domain::roster::Roster;
use crate::domain::salary::SalaryCalculator;
use crate::error::Result;
use tracing::info;

/// Pays employees the salary their role is worth.
pub struct PaymentProcessor {
    calculator: SalaryCalculator,
}

impl PaymentProcessor {
    pub fn new(calculator: SalaryCalculator) -> Self {
        Self { calculator }
    }

    /// Overwrites `employee.balance` with the salary for their role.
    ///
    /// Paying twice recomputes and overwrites; balances never accumulate.
    /// On an unknown role the balance is left as it was.
    pub fn pay(&self, employee: &mut Employee) -> Result<Balance> {
        let salary = self.calculator.calculate(employee.role)?;
        employee.balance = salary;
        info!(
            employee = %employee.id,
            name = %employee.name,
            role = %employee.role,
            %salary,
            "paid"
        );
        Ok(salary)
    }

    /// Pays the roster entry for `id`, or returns `Ok(None)` if nobody on the
    /// roster has that id.
    pub fn pay_by_id(&self, roster: &mut Roster, id: &EmployeeId) -> Result<Option<Balance>> {
        match roster.get_mut(id) {
            Some(employee) => self.pay(employee).map(Some),
            None => Ok(None),
        }
    }
}
