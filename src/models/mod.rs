//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod country;
mod deduction;
mod employee;
mod statistics;
mod tax_bracket;

pub use country::CountryCode;
pub use deduction::{Deduction, DeductionKind, SalaryBreakdown};
pub use employee::{Employee, EmployeeUpdate, NewEmployee};
pub use statistics::{GroupBy, SalaryAggregate, SalaryStatistics};
pub use tax_bracket::TaxBracket;

/// A money amount as an integer count of minor currency units (cents).
pub type Cents = i64;
