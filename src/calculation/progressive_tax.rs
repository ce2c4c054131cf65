//! Progressive income tax calculation.
//!
//! Brackets are walked in ascending order against a running `remaining`
//! amount that starts at the gross salary. A bracket applies only when
//! `remaining` is strictly greater than its lower bound. The amount taxed in
//! a bracket is `min(remaining - min, max - min)`, each bracket's tax is
//! floored on its own, and `remaining` is reduced by the taxed amount before
//! the next bracket is tested.

use tracing::debug;

use super::money::floor_percentage;
use super::tax_brackets::{brackets_for, has_deductions};
use crate::models::{Cents, CountryCode, TaxBracket};

/// How much of the gross one bracket taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketAllocation {
    /// The bracket that applied.
    pub bracket: TaxBracket,
    /// Cents of income taxed in this bracket.
    pub taxed_cents: Cents,
    /// Tax due for this bracket, floored.
    pub tax_cents: Cents,
}

/// The result of a tax calculation with its per-bracket allocations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaxCalculationResult {
    /// Total tax in cents.
    pub total_cents: Cents,
    /// The brackets that applied, in ascending order.
    pub allocations: Vec<BracketAllocation>,
}

/// Calculates tax with a per-bracket breakdown.
///
/// `gross_cents` must already be non-negative. Unsupported countries return
/// an empty result without walking any brackets.
pub fn calculate_tax_detailed(gross_cents: Cents, country: CountryCode) -> TaxCalculationResult {
    if !has_deductions(country) {
        return TaxCalculationResult::default();
    }

    let mut result = TaxCalculationResult::default();
    let mut remaining = gross_cents;

    for bracket in brackets_for(country) {
        // remaining only shrinks and lower bounds only grow
        if remaining <= bracket.min_cents {
            break;
        }

        let taxed_cents = (remaining - bracket.min_cents).min(bracket.width_cents());
        let tax_cents = floor_percentage(taxed_cents, bracket.rate_basis_points);

        result.total_cents += tax_cents;
        result.allocations.push(BracketAllocation {
            bracket: *bracket,
            taxed_cents,
            tax_cents,
        });
        remaining -= taxed_cents;
    }

    debug!(
        country = %country,
        gross_cents,
        brackets_applied = result.allocations.len(),
        tax_cents = result.total_cents,
        "Progressive tax calculated"
    );

    result
}

/// Calculates progressive income tax in cents.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_tax;
/// use salary_engine::models::CountryCode;
///
/// // First US bracket: 10% of $10,000.00
/// assert_eq!(calculate_tax(1_000_000, CountryCode::Us), 100_000);
/// assert_eq!(calculate_tax(1_000_000, CountryCode::Unsupported), 0);
/// ```
pub fn calculate_tax(gross_cents: Cents, country: CountryCode) -> Cents {
    calculate_tax_detailed(gross_cents, country).total_cents
}
