//! Country codes that select a tax bracket table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A country tag used to select deduction rules.
///
/// Only a closed set of countries carry deductions. Every other code, and
/// the absence of a country, maps to [`CountryCode::Unsupported`], which is
/// a valid value meaning "no deductions apply".
///
/// # Example
///
/// ```
/// use salary_engine::models::CountryCode;
///
/// assert_eq!(CountryCode::parse("us"), CountryCode::Us);
/// assert_eq!(CountryCode::parse("XX"), CountryCode::Unsupported);
/// assert_eq!(CountryCode::from_optional(None), CountryCode::Unsupported);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    /// United States.
    Us,
    /// United Kingdom.
    Uk,
    /// India.
    In,
    /// Canada.
    Ca,
    /// Any unrecognized code, or no country at all.
    Unsupported,
}

impl CountryCode {
    /// All countries that have a bracket table.
    pub const SUPPORTED: [CountryCode; 4] = [
        CountryCode::Us,
        CountryCode::Uk,
        CountryCode::In,
        CountryCode::Ca,
    ];

    /// Parses a two-letter code, ignoring case and surrounding whitespace.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "US" => CountryCode::Us,
            "UK" => CountryCode::Uk,
            "IN" => CountryCode::In,
            "CA" => CountryCode::Ca,
            _ => CountryCode::Unsupported,
        }
    }

    /// Maps an employee's optional country to a tag.
    pub fn from_optional(code: Option<&str>) -> Self {
        code.map(Self::parse).unwrap_or(CountryCode::Unsupported)
    }

    /// Returns the canonical code, or `None` for [`CountryCode::Unsupported`].
    pub fn as_code(&self) -> Option<&'static str> {
        match self {
            CountryCode::Us => Some("US"),
            CountryCode::Uk => Some("UK"),
            CountryCode::In => Some("IN"),
            CountryCode::Ca => Some("CA"),
            CountryCode::Unsupported => None,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code().unwrap_or("unsupported"))
    }
}
