//! Capped percentage deductions (insurance and retirement).
//!
//! Both deductions are a flat percentage of gross, floored to the cent and
//! then limited to a fixed cap. The rates and caps are global, not
//! per-country; a country without a bracket table gets neither deduction.

use super::money::floor_percentage;
use super::tax_brackets::has_deductions;
use crate::models::{Cents, CountryCode};

/// Insurance rate in basis points (5%).
pub const INSURANCE_RATE_BASIS_POINTS: u32 = 500;

/// Maximum insurance deduction in cents ($10,000.00).
pub const INSURANCE_CAP_CENTS: Cents = 1_000_000;

/// Retirement rate in basis points (3%).
pub const RETIREMENT_RATE_BASIS_POINTS: u32 = 300;

/// Maximum retirement deduction in cents ($5,000.00).
pub const RETIREMENT_CAP_CENTS: Cents = 500_000;

fn capped_percentage(
    gross_cents: Cents,
    country: CountryCode,
    rate_basis_points: u32,
    cap_cents: Cents,
) -> Cents {
    if !has_deductions(country) {
        return 0;
    }
    floor_percentage(gross_cents, rate_basis_points).min(cap_cents)
}

/// Calculates the insurance deduction: 5% of gross, capped at $10,000.00.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_insurance;
/// use salary_engine::models::CountryCode;
///
/// assert_eq!(calculate_insurance(10_000_000, CountryCode::Us), 500_000);
/// assert_eq!(calculate_insurance(30_000_000, CountryCode::Us), 1_000_000);
/// ```
pub fn calculate_insurance(gross_cents: Cents, country: CountryCode) -> Cents {
    capped_percentage(
        gross_cents,
        country,
        INSURANCE_RATE_BASIS_POINTS,
        INSURANCE_CAP_CENTS,
    )
}

/// Calculates the retirement deduction: 3% of gross, capped at $5,000.00.
pub fn calculate_retirement(gross_cents: Cents, country: CountryCode) -> Cents {
    capped_percentage(
        gross_cents,
        country,
        RETIREMENT_RATE_BASIS_POINTS,
        RETIREMENT_CAP_CENTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insurance_below_cap() {
        assert_eq!(calculate_insurance(10_000_000, CountryCode::Us), 500_000);
    }

    #[test]
    fn test_insurance_capped() {
        // 5% of $300,000.00 would be $15,000.00
        assert_eq!(calculate_insurance(30_000_000, CountryCode::Us), 1_000_000);
    }

    #[test]
    fn test_insurance_exactly_at_cap() {
        assert_eq!(calculate_insurance(20_000_000, CountryCode::Uk), 1_000_000);
    }

    #[test]
    fn test_retirement_below_cap() {
        assert_eq!(calculate_retirement(10_000_000, CountryCode::Us), 300_000);
    }

    #[test]
    fn test_retirement_capped() {
        // 3% of $200,000.00 would be $6,000.00
        assert_eq!(calculate_retirement(20_000_000, CountryCode::Us), 500_000);
    }

    #[test]
    fn test_floors_fractional_cents() {
        // 5% of 39 = 1.95, 3% of 39 = 1.17
        assert_eq!(calculate_insurance(39, CountryCode::Ca), 1);
        assert_eq!(calculate_retirement(39, CountryCode::Ca), 1);
    }

    #[test]
    fn test_unsupported_country_gets_nothing() {
        assert_eq!(calculate_insurance(30_000_000, CountryCode::Unsupported), 0);
        assert_eq!(calculate_retirement(30_000_000, CountryCode::Unsupported), 0);
    }

    #[test]
    fn test_caps_hold_at_i64_max() {
        assert_eq!(calculate_insurance(i64::MAX, CountryCode::In), INSURANCE_CAP_CENTS);
        assert_eq!(calculate_retirement(i64::MAX, CountryCode::In), RETIREMENT_CAP_CENTS);
    }
}
