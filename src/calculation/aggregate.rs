//! Formatting of grouped salary aggregates.
//!
//! The persistence layer produces raw count/sum/min/max per group; averaging
//! introduces fractional cents, which are rounded half up here.

use super::money::average_cents;
use crate::models::{GroupBy, SalaryAggregate, SalaryStatistics};

/// Turns a raw aggregate into presentable statistics.
///
/// Returns `None` when the group is empty.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::summarize;
/// use salary_engine::models::{GroupBy, SalaryAggregate};
///
/// let mut aggregate = SalaryAggregate::default();
/// aggregate.record(100_000);
/// aggregate.record(100_001);
///
/// let stats = summarize(GroupBy::Country, "US", aggregate).unwrap();
/// assert_eq!(stats.average_salary_cents, 100_001); // 100,000.5 rounds up
/// ```
pub fn summarize(
    group_by: GroupBy,
    key: impl Into<String>,
    aggregate: SalaryAggregate,
) -> Option<SalaryStatistics> {
    let average_salary_cents = average_cents(aggregate.total_cents, aggregate.count)?;
    Some(SalaryStatistics {
        group_by,
        key: key.into(),
        employee_count: aggregate.count,
        average_salary_cents,
        min_salary_cents: aggregate.min_cents,
        max_salary_cents: aggregate.max_cents,
    })
}
