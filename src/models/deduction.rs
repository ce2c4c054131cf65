//! Deduction and salary breakdown models.
//!
//! These are derived values computed per request from a gross salary and a
//! country. They are never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Cents;

/// The kind of a salary deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Progressive income tax.
    Tax,
    /// Capped insurance contribution.
    Insurance,
    /// Capped retirement contribution.
    Retirement,
}

/// A single deduction applied to a gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    /// What this deduction is for.
    pub kind: DeductionKind,
    /// The deducted amount in cents.
    pub amount_cents: Cents,
    /// The amount as a percentage of the effective gross (display only).
    pub percentage: Decimal,
    /// Human-readable description naming the rate and cap.
    pub description: String,
}

/// The full decomposition of a gross salary into deductions and net pay.
///
/// Invariants: `total_deductions_cents` is the sum of the deduction amounts
/// and `net_cents == gross_cents - total_deductions_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    /// The effective gross salary (negative inputs are reported as zero).
    pub gross_cents: Cents,
    /// Deductions in tax, insurance, retirement order.
    pub deductions: Vec<Deduction>,
    /// Sum of all deduction amounts.
    pub total_deductions_cents: Cents,
    /// Gross minus total deductions.
    pub net_cents: Cents,
}

impl SalaryBreakdown {
    /// Returns the amount of the deduction of the given kind, or zero if absent.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::calculation::build_breakdown;
    /// use salary_engine::models::{CountryCode, DeductionKind};
    ///
    /// let breakdown = build_breakdown(10_000_000, CountryCode::Us);
    /// assert_eq!(breakdown.amount_of(DeductionKind::Insurance), 500_000);
    /// ```
    pub fn amount_of(&self, kind: DeductionKind) -> Cents {
        self.deductions
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.amount_cents)
            .unwrap_or(0)
    }
}
