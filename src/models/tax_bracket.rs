//! Progressive tax bracket definition.

use rust_decimal::Decimal;
use serde::Serialize;

use super::Cents;
use crate::calculation::basis_points_to_percent;

/// A contiguous income range taxed at a flat rate.
///
/// The rate is stored in basis points of a percent (`2050` is 20.5%) so the
/// bracket table can be `const` and tax arithmetic stays in integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    /// Lower bound of the bracket in cents.
    pub min_cents: Cents,
    /// Upper bound of the bracket in cents; `None` for the top bracket.
    pub max_cents: Option<Cents>,
    /// The rate in hundredths of a percent.
    pub rate_basis_points: u32,
}

impl TaxBracket {
    /// Creates a bounded bracket.
    pub const fn bounded(min_cents: Cents, max_cents: Cents, rate_basis_points: u32) -> Self {
        Self {
            min_cents,
            max_cents: Some(max_cents),
            rate_basis_points,
        }
    }

    /// Creates the unbounded top bracket.
    pub const fn unbounded(min_cents: Cents, rate_basis_points: u32) -> Self {
        Self {
            min_cents,
            max_cents: None,
            rate_basis_points,
        }
    }

    /// Width of the bracket in cents, or `Cents::MAX` for the top bracket.
    pub fn width_cents(&self) -> Cents {
        match self.max_cents {
            Some(max) => max - self.min_cents,
            None => Cents::MAX,
        }
    }

    /// The rate as a percentage (e.g. `20.5`).
    pub fn rate_percent(&self) -> Decimal {
        basis_points_to_percent(self.rate_basis_points)
    }
}
