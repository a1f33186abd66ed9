//! Domain types: payroll entities, the salary table, the roster, clients,
//! and the storage port clients are written through.

pub mod client;
pub mod employee;
pub mod ports;
pub mod roster;
pub mod salary;
