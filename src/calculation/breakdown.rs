//! Salary breakdown composition.
//!
//! Combines the tax, insurance and retirement calculators into a single
//! [`SalaryBreakdown`] with totals, net pay and percentage annotations.

use tracing::debug;

use super::capped_deduction::{calculate_insurance, calculate_retirement};
use super::money::percentage_of;
use super::progressive_tax::calculate_tax;
use crate::models::{Cents, CountryCode, Deduction, DeductionKind, SalaryBreakdown};

const INSURANCE_DESCRIPTION: &str = "Insurance: 5% of gross salary, capped at $10,000.00";
const RETIREMENT_DESCRIPTION: &str = "Retirement: 3% of gross salary, capped at $5,000.00";

fn tax_description(country: CountryCode) -> String {
    match country.as_code() {
        Some(code) => format!("Income tax: progressive brackets for {}", code),
        None => "Income tax: no deductions apply for this country".to_string(),
    }
}

fn deduction(
    kind: DeductionKind,
    amount_cents: Cents,
    gross_cents: Cents,
    description: String,
) -> Deduction {
    Deduction {
        kind,
        amount_cents,
        percentage: percentage_of(amount_cents, gross_cents),
        description,
    }
}

/// Builds the full salary breakdown for a gross amount and country.
///
/// A negative gross is treated as zero everywhere, including the reported
/// gross, so the result equals the breakdown for a zero salary. Deductions
/// are always returned in tax, insurance, retirement order.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::build_breakdown;
/// use salary_engine::models::CountryCode;
///
/// let breakdown = build_breakdown(10_000_000, CountryCode::Us);
/// assert_eq!(breakdown.total_deductions_cents, 900_000 + 500_000 + 300_000);
/// assert_eq!(breakdown.net_cents, 10_000_000 - 1_700_000);
///
/// let negative = build_breakdown(-1_000, CountryCode::Us);
/// assert_eq!(negative, build_breakdown(0, CountryCode::Us));
/// ```
pub fn build_breakdown(gross_cents: Cents, country: CountryCode) -> SalaryBreakdown {
    let gross_cents = gross_cents.max(0);

    let tax = calculate_tax(gross_cents, country);
    let insurance = calculate_insurance(gross_cents, country);
    let retirement = calculate_retirement(gross_cents, country);

    let total_deductions_cents = tax + insurance + retirement;
    let net_cents = gross_cents - total_deductions_cents;

    debug!(
        country = %country,
        gross_cents,
        tax,
        insurance,
        retirement,
        net_cents,
        "Salary breakdown built"
    );

    SalaryBreakdown {
        gross_cents,
        deductions: vec![
            deduction(DeductionKind::Tax, tax, gross_cents, tax_description(country)),
            deduction(
                DeductionKind::Insurance,
                insurance,
                gross_cents,
                INSURANCE_DESCRIPTION.to_string(),
            ),
            deduction(
                DeductionKind::Retirement,
                retirement,
                gross_cents,
                RETIREMENT_DESCRIPTION.to_string(),
            ),
        ],
        total_deductions_cents,
        net_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn kinds(breakdown: &SalaryBreakdown) -> Vec<DeductionKind> {
        breakdown.deductions.iter().map(|d| d.kind).collect()
    }

    /// SB-001: zero gross
    #[test]
    fn test_zero_gross_is_all_zero() {
        let breakdown = build_breakdown(0, CountryCode::Us);

        assert_eq!(breakdown.gross_cents, 0);
        assert_eq!(breakdown.total_deductions_cents, 0);
        assert_eq!(breakdown.net_cents, 0);
        for deduction in &breakdown.deductions {
            assert_eq!(deduction.amount_cents, 0);
            assert_eq!(deduction.percentage, Decimal::ZERO);
        }
    }

    /// SB-002: $100,000 in the US
    #[test]
    fn test_us_100k() {
        let breakdown = build_breakdown(10_000_000, CountryCode::Us);

        assert_eq!(breakdown.amount_of(DeductionKind::Tax), 900_000);
        assert_eq!(breakdown.amount_of(DeductionKind::Insurance), 500_000);
        assert_eq!(breakdown.amount_of(DeductionKind::Retirement), 300_000);
        assert_eq!(breakdown.total_deductions_cents, 1_700_000);
        assert_eq!(breakdown.net_cents, 8_300_000);
    }

    /// SB-003: insurance cap at $300,000
    #[test]
    fn test_us_300k_caps_insurance() {
        let breakdown = build_breakdown(30_000_000, CountryCode::Us);
        assert_eq!(breakdown.amount_of(DeductionKind::Insurance), 1_000_000);
    }

    /// SB-004: retirement cap at $200,000
    #[test]
    fn test_us_200k_caps_retirement() {
        let breakdown = build_breakdown(20_000_000, CountryCode::Us);
        assert_eq!(breakdown.amount_of(DeductionKind::Retirement), 500_000);
    }

    /// SB-005: unsupported country
    #[test]
    fn test_unsupported_country_has_no_deductions() {
        let breakdown = build_breakdown(100_000, CountryCode::Unsupported);

        assert_eq!(breakdown.total_deductions_cents, 0);
        assert_eq!(breakdown.net_cents, 100_000);
        assert!(breakdown.deductions.iter().all(|d| d.amount_cents == 0));
        assert!(breakdown.deductions[0].description.contains("no deductions"));
    }

    /// SB-006: negative gross normalizes to zero
    #[test]
    fn test_negative_gross_equals_zero_breakdown() {
        let negative = build_breakdown(-1_000, CountryCode::Us);
        assert_eq!(negative, build_breakdown(0, CountryCode::Us));
        assert_eq!(negative.gross_cents, 0);
    }

    #[test]
    fn test_one_cent_gross() {
        let breakdown = build_breakdown(1, CountryCode::Us);
        assert_eq!(breakdown.total_deductions_cents, 0);
        assert_eq!(breakdown.net_cents, 1);
    }

    #[test]
    fn test_deductions_are_in_fixed_order() {
        let breakdown = build_breakdown(5_000_000, CountryCode::Ca);
        assert_eq!(
            kinds(&breakdown),
            vec![
                DeductionKind::Tax,
                DeductionKind::Insurance,
                DeductionKind::Retirement
            ]
        );
    }

    #[test]
    fn test_percentages_are_relative_to_gross() {
        let breakdown = build_breakdown(10_000_000, CountryCode::Us);
        assert_eq!(breakdown.deductions[0].percentage, dec("9"));
        assert_eq!(breakdown.deductions[1].percentage, dec("5"));
        assert_eq!(breakdown.deductions[2].percentage, dec("3"));
    }

    #[test]
    fn test_very_large_gross_keeps_caps_and_positive_net() {
        for country in CountryCode::SUPPORTED {
            let breakdown = build_breakdown(i64::MAX, country);

            assert_eq!(breakdown.amount_of(DeductionKind::Insurance), 1_000_000);
            assert_eq!(breakdown.amount_of(DeductionKind::Retirement), 500_000);
            assert!(breakdown.amount_of(DeductionKind::Tax) > 0, "{} tax", country);
            assert!(breakdown.net_cents > 0, "{} net", country);
            assert!(breakdown.net_cents < breakdown.gross_cents, "{} net", country);
        }
    }

    #[test]
    fn test_descriptions_name_rates() {
        let breakdown = build_breakdown(10_000_000, CountryCode::Uk);
        assert!(breakdown.deductions[0].description.contains("UK"));
        assert!(breakdown.deductions[1].description.contains("5%"));
        assert!(breakdown.deductions[2].description.contains("3%"));
    }
}
