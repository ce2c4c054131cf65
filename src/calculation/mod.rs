//! Calculation logic for the salary engine.
//!
//! This module contains the pure deduction functions: the static tax bracket
//! table, the progressive tax walk, the capped insurance and retirement
//! deductions, salary breakdown composition, and aggregate formatting.
//! Every function here is synchronous and side-effect free.

mod aggregate;
mod breakdown;
mod capped_deduction;
mod money;
mod progressive_tax;
mod tax_brackets;

pub use aggregate::summarize;
pub use breakdown::build_breakdown;
pub use capped_deduction::{
    INSURANCE_CAP_CENTS, INSURANCE_RATE_BASIS_POINTS, RETIREMENT_CAP_CENTS,
    RETIREMENT_RATE_BASIS_POINTS, calculate_insurance, calculate_retirement,
};
pub use money::{average_cents, basis_points_to_percent, floor_percentage, percentage_of};
pub use progressive_tax::{
    BracketAllocation, TaxCalculationResult, calculate_tax, calculate_tax_detailed,
};
pub use tax_brackets::{brackets_for, has_deductions};
