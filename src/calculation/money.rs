//! Integer money arithmetic.
//!
//! All money values are counts of minor currency units (cents). Rates are
//! expressed in basis points of a percent (hundredths of a percent), so a
//! rate of 20.5% is `2050`. This keeps every money-producing division an
//! integer floor division.

use rust_decimal::Decimal;

use crate::models::Cents;

// basis points in 100%
const BASIS_POINTS_PER_WHOLE: i128 = 10_000;

/// Returns `floor(amount * rate / 100)` where the rate is given in basis points.
///
/// The amount must be non-negative. Intermediate products are computed in
/// `i128`, so this never overflows for any `i64` amount and any rate up to
/// 100%. A larger rate whose result does not fit saturates at `Cents::MAX`
/// (`Cents::MIN` for a negative amount).
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::floor_percentage;
///
/// // 5% of $100,000.00
/// assert_eq!(floor_percentage(10_000_000, 500), 500_000);
/// // 10% of 1 cent floors to zero
/// assert_eq!(floor_percentage(1, 1_000), 0);
/// ```
pub fn floor_percentage(amount_cents: Cents, rate_basis_points: u32) -> Cents {
    let product = i128::from(amount_cents) * i128::from(rate_basis_points);
    let quotient = product.div_euclid(BASIS_POINTS_PER_WHOLE);
    Cents::try_from(quotient).unwrap_or(if quotient < 0 { Cents::MIN } else { Cents::MAX })
}

/// Converts a basis-point rate into a percentage value (e.g. `2050` -> `20.5`).
pub fn basis_points_to_percent(rate_basis_points: u32) -> Decimal {
    Decimal::new(i64::from(rate_basis_points), 2).normalize()
}

/// Returns `part / whole * 100` as an exact decimal, or zero when `whole` is zero.
///
/// Display only; never feed the result back into money arithmetic.
pub fn percentage_of(part_cents: Cents, whole_cents: Cents) -> Decimal {
    if whole_cents <= 0 {
        return Decimal::ZERO;
    }
    let part = Decimal::from(part_cents);
    let whole = Decimal::from(whole_cents);
    (part * Decimal::ONE_HUNDRED / whole).normalize()
}

/// Rounds the mean of `total_cents / count` to the nearest cent, half up.
///
/// Returns `None` for an empty group.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::average_cents;
///
/// assert_eq!(average_cents(5, 2), Some(3)); // 2.5 -> 3
/// assert_eq!(average_cents(4, 3), Some(1)); // 1.33 -> 1
/// assert_eq!(average_cents(0, 0), None);
/// ```
pub fn average_cents(total_cents: i128, count: u64) -> Option<Cents> {
    if count == 0 {
        return None;
    }
    let count = i128::from(count);
    let rounded = (2 * total_cents + count).div_euclid(2 * count);
    Cents::try_from(rounded).ok()
}
