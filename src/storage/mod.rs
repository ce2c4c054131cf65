//! Employee persistence.
//!
//! [`EmployeeRepository`] is the seam between the employee service and its
//! store. Implementations own record identity, soft-delete bookkeeping,
//! email uniqueness among live records, and grouped salary aggregation.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeeUpdate, NewEmployee, SalaryAggregate};

pub use memory::InMemoryEmployeeRepository;

/// Filters and paging for employee listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Only employees in this country (case-insensitive).
    pub country: Option<String>,
    /// Only employees with this job title (case-insensitive).
    pub job_title: Option<String>,
    /// Include soft-deleted employees.
    pub include_deleted: bool,
    /// One-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            country: None,
            job_title: None,
            include_deleted: false,
            page: 1,
            limit: 20,
        }
    }
}

/// One page of employees.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePage {
    /// The employees on this page.
    pub items: Vec<Employee>,
    /// Number of employees matching the filter across all pages.
    pub total: usize,
    /// One-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
}

/// Storage operations for employee records.
///
/// Uniqueness checks and the write they guard must be atomic with respect to
/// concurrent writers.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new employee. Fails with `DuplicateEmail` if a live
    /// employee already uses the email.
    async fn create(&self, employee: NewEmployee) -> EngineResult<Employee>;

    /// Fetches an employee by id, including soft-deleted ones.
    async fn find(&self, id: Uuid) -> EngineResult<Option<Employee>>;

    /// Lists employees matching the filter, ordered by creation time.
    async fn list(&self, filter: &EmployeeFilter) -> EngineResult<EmployeePage>;

    /// Applies a partial update to a live employee.
    async fn update(&self, id: Uuid, update: EmployeeUpdate) -> EngineResult<Employee>;

    /// Soft-deletes a live employee.
    async fn soft_delete(&self, id: Uuid) -> EngineResult<()>;

    /// Clears the deletion mark of a soft-deleted employee.
    async fn restore(&self, id: Uuid) -> EngineResult<Employee>;

    /// Aggregates salaries of live employees in a country.
    async fn aggregate_by_country(&self, country: &str) -> EngineResult<SalaryAggregate>;

    /// Aggregates salaries of live employees with a job title.
    async fn aggregate_by_job_title(&self, job_title: &str) -> EngineResult<SalaryAggregate>;
}
