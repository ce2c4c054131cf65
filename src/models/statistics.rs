//! Aggregate salary statistics.

use serde::{Deserialize, Serialize};

use super::Cents;

/// The dimension an aggregate is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Grouped by employee country.
    Country,
    /// Grouped by employee job title.
    JobTitle,
}

/// Raw grouped aggregation as produced by the persistence layer.
///
/// The sum is kept in `i128` so that large groups of large salaries cannot
/// overflow before averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryAggregate {
    /// Number of employees in the group.
    pub count: u64,
    /// Sum of gross salaries in cents.
    pub total_cents: i128,
    /// Smallest gross salary in cents.
    pub min_cents: Cents,
    /// Largest gross salary in cents.
    pub max_cents: Cents,
}

impl SalaryAggregate {
    /// Folds one salary into the aggregate.
    pub fn record(&mut self, salary_cents: Cents) {
        if self.count == 0 {
            self.min_cents = salary_cents;
            self.max_cents = salary_cents;
        } else {
            self.min_cents = self.min_cents.min(salary_cents);
            self.max_cents = self.max_cents.max(salary_cents);
        }
        self.count += 1;
        self.total_cents += i128::from(salary_cents);
    }
}

/// Salary statistics for one group, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStatistics {
    /// The grouping dimension.
    pub group_by: GroupBy,
    /// The group key (country code or job title).
    pub key: String,
    /// Number of employees in the group.
    pub employee_count: u64,
    /// Mean gross salary rounded to the nearest cent.
    pub average_salary_cents: Cents,
    /// Smallest gross salary.
    pub min_salary_cents: Cents,
    /// Largest gross salary.
    pub max_salary_cents: Cents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_min_max_and_total() {
        let mut aggregate = SalaryAggregate::default();
        aggregate.record(200);
        aggregate.record(100);
        aggregate.record(300);

        assert_eq!(aggregate.count, 3);
        assert_eq!(aggregate.total_cents, 600);
        assert_eq!(aggregate.min_cents, 100);
        assert_eq!(aggregate.max_cents, 300);
    }

    #[test]
    fn test_first_record_sets_min_and_max() {
        let mut aggregate = SalaryAggregate::default();
        aggregate.record(5_000_000);

        assert_eq!(aggregate.min_cents, 5_000_000);
        assert_eq!(aggregate.max_cents, 5_000_000);
    }

    #[test]
    fn test_total_does_not_overflow_for_large_salaries() {
        let mut aggregate = SalaryAggregate::default();
        aggregate.record(i64::MAX);
        aggregate.record(i64::MAX);

        assert_eq!(aggregate.total_cents, 2 * i128::from(i64::MAX));
    }
}
