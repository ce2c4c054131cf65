//! Property tests for the deduction engine.

use proptest::prelude::*;

use salary_engine::calculation::{
    INSURANCE_CAP_CENTS, RETIREMENT_CAP_CENTS, average_cents, build_breakdown, calculate_tax,
    calculate_tax_detailed,
};
use salary_engine::models::{CountryCode, DeductionKind, SalaryAggregate};

fn any_country() -> impl Strategy<Value = CountryCode> {
    prop_oneof![
        Just(CountryCode::Us),
        Just(CountryCode::Uk),
        Just(CountryCode::In),
        Just(CountryCode::Ca),
        Just(CountryCode::Unsupported),
    ]
}

fn supported_country() -> impl Strategy<Value = CountryCode> {
    prop::sample::select(CountryCode::SUPPORTED.to_vec())
}

const MAX_GROSS: i64 = 10_000_000_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_breakdown_totals_are_consistent(gross in 0..MAX_GROSS, country in any_country()) {
        let breakdown = build_breakdown(gross, country);

        let sum: i64 = breakdown.deductions.iter().map(|d| d.amount_cents).sum();
        prop_assert_eq!(breakdown.total_deductions_cents, sum);
        prop_assert_eq!(breakdown.net_cents, gross - sum);
        prop_assert!(breakdown.net_cents >= 0);
        prop_assert_eq!(breakdown.deductions.len(), 3);
    }

    #[test]
    fn prop_negative_gross_matches_zero(gross in i64::MIN..0, country in any_country()) {
        prop_assert_eq!(build_breakdown(gross, country), build_breakdown(0, country));
    }

    #[test]
    fn prop_caps_hold(gross in 0..MAX_GROSS, country in any_country()) {
        let breakdown = build_breakdown(gross, country);

        prop_assert!(breakdown.amount_of(DeductionKind::Insurance) <= INSURANCE_CAP_CENTS);
        prop_assert!(breakdown.amount_of(DeductionKind::Retirement) <= RETIREMENT_CAP_CENTS);
    }

    #[test]
    fn prop_unsupported_country_deducts_nothing(gross in 0..MAX_GROSS) {
        let breakdown = build_breakdown(gross, CountryCode::Unsupported);

        prop_assert_eq!(breakdown.total_deductions_cents, 0);
        prop_assert_eq!(breakdown.net_cents, gross);
    }

    #[test]
    fn prop_tax_is_monotone(
        gross in 0..MAX_GROSS,
        raise in 0..1_000_000_000i64,
        country in supported_country(),
    ) {
        prop_assert!(calculate_tax(gross, country) <= calculate_tax(gross + raise, country));
    }

    #[test]
    fn prop_allocations_sum_to_total(gross in 0..MAX_GROSS, country in supported_country()) {
        let result = calculate_tax_detailed(gross, country);

        let taxed: i64 = result.allocations.iter().map(|a| a.taxed_cents).sum();
        let tax: i64 = result.allocations.iter().map(|a| a.tax_cents).sum();
        prop_assert_eq!(tax, result.total_cents);
        prop_assert!(taxed <= gross);
        prop_assert!(result.total_cents <= gross);
    }

    #[test]
    fn prop_average_lies_between_min_and_max(
        salaries in prop::collection::vec(0..100_000_000_000i64, 1..50),
    ) {
        let mut aggregate = SalaryAggregate::default();
        for salary in &salaries {
            aggregate.record(*salary);
        }

        let average = average_cents(aggregate.total_cents, aggregate.count).unwrap();
        prop_assert!(average >= aggregate.min_cents);
        prop_assert!(average <= aggregate.max_cents);
    }
}
