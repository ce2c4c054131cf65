//! Static tax bracket tables.
//!
//! One ordered bracket list per supported country. Brackets are contiguous:
//! each bracket's lower bound equals the previous bracket's upper bound, and
//! the last bracket is unbounded.

use crate::models::{CountryCode, TaxBracket};

const US_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::bounded(0, 1_000_000, 1_000),
    TaxBracket::bounded(1_000_000, 4_000_000, 1_200),
    TaxBracket::bounded(4_000_000, 8_500_000, 2_200),
    TaxBracket::unbounded(8_500_000, 2_400),
];

const UK_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::bounded(0, 1_257_000, 0),
    TaxBracket::bounded(1_257_000, 5_027_000, 2_000),
    TaxBracket::bounded(5_027_000, 12_514_000, 4_000),
    TaxBracket::unbounded(12_514_000, 4_500),
];

const IN_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::bounded(0, 30_000_000, 0),
    TaxBracket::bounded(30_000_000, 70_000_000, 500),
    TaxBracket::bounded(70_000_000, 100_000_000, 1_000),
    TaxBracket::bounded(100_000_000, 120_000_000, 1_500),
    TaxBracket::bounded(120_000_000, 150_000_000, 2_000),
    TaxBracket::unbounded(150_000_000, 3_000),
];

const CA_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::bounded(0, 5_586_700, 1_500),
    TaxBracket::bounded(5_586_700, 11_173_300, 2_050),
    TaxBracket::bounded(11_173_300, 17_320_500, 2_600),
    TaxBracket::bounded(17_320_500, 24_675_200, 2_900),
    TaxBracket::unbounded(24_675_200, 3_300),
];

/// Returns the ordered bracket list for a country.
///
/// Unsupported countries get an empty slice.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::brackets_for;
/// use salary_engine::models::CountryCode;
///
/// assert_eq!(brackets_for(CountryCode::Us).len(), 4);
/// assert!(brackets_for(CountryCode::Unsupported).is_empty());
/// ```
pub fn brackets_for(country: CountryCode) -> &'static [TaxBracket] {
    match country {
        CountryCode::Us => &US_BRACKETS,
        CountryCode::Uk => &UK_BRACKETS,
        CountryCode::In => &IN_BRACKETS,
        CountryCode::Ca => &CA_BRACKETS,
        CountryCode::Unsupported => &[],
    }
}

/// Returns true iff the country has a non-empty bracket list.
pub fn has_deductions(country: CountryCode) -> bool {
    !brackets_for(country).is_empty()
}
