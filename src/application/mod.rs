//! Application layer: the services that act on domain types.
//!
//! `PaymentProcessor` and `ReportGenerator` share one `SalaryCalculator`, so a
//! report and a payment made from the same table always agree. The
//! `ClientController` only ever sees the repository port.

pub mod client_controller;
pub mod payment;
pub mod report;
