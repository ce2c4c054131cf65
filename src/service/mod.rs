//! Employee service.
//!
//! [`EmployeeService`] sits between the HTTP layer and the repository. It
//! validates input, supplies each employee's gross salary and country to the
//! deduction calculators, and formats grouped salary aggregates.

mod validation;

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::calculation::{brackets_for, build_breakdown, summarize};
use crate::config::ServiceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CountryCode, Employee, EmployeeUpdate, GroupBy, NewEmployee, SalaryBreakdown,
    SalaryStatistics, TaxBracket,
};
use crate::storage::{EmployeeFilter, EmployeePage, EmployeeRepository};

pub use validation::{validate_new_employee, validate_update};

/// Employee operations over a repository.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    config: Arc<ServiceConfig>,
}

impl EmployeeService {
    /// Creates a service over the given repository and configuration.
    pub fn new(repository: Arc<dyn EmployeeRepository>, config: Arc<ServiceConfig>) -> Self {
        Self { repository, config }
    }

    /// Validates and stores a new employee.
    pub async fn create(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let employee = validate_new_employee(employee, &self.config.validation)?;
        let created = self.repository.create(employee).await?;
        info!(employee_id = %created.id, "Employee created");
        Ok(created)
    }

    /// Returns a live employee.
    pub async fn get(&self, id: Uuid) -> EngineResult<Employee> {
        match self.repository.find(id).await? {
            Some(employee) if !employee.is_deleted() => Ok(employee),
            _ => Err(EngineError::EmployeeNotFound { id }),
        }
    }

    /// Lists employees, clamping the requested page size to the configured limits.
    pub async fn list(&self, mut filter: EmployeeFilter) -> EngineResult<EmployeePage> {
        let pagination = &self.config.pagination;
        if filter.limit == 0 {
            filter.limit = pagination.default_limit;
        }
        filter.limit = filter.limit.min(pagination.max_limit);
        filter.page = filter.page.max(1);
        self.repository.list(&filter).await
    }

    /// Validates and applies a partial update.
    pub async fn update(&self, id: Uuid, update: EmployeeUpdate) -> EngineResult<Employee> {
        let update = validate_update(update, &self.config.validation)?;
        let updated = self.repository.update(id, update).await?;
        info!(employee_id = %id, "Employee updated");
        Ok(updated)
    }

    /// Soft-deletes an employee.
    pub async fn delete(&self, id: Uuid) -> EngineResult<()> {
        self.repository.soft_delete(id).await?;
        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// Restores a soft-deleted employee.
    pub async fn restore(&self, id: Uuid) -> EngineResult<Employee> {
        let restored = self.repository.restore(id).await?;
        info!(employee_id = %id, "Employee restored");
        Ok(restored)
    }

    /// Computes the salary breakdown for a live employee.
    pub async fn salary_breakdown(&self, id: Uuid) -> EngineResult<SalaryBreakdown> {
        let employee = self.get(id).await?;
        Ok(build_breakdown(employee.salary_cents, employee.country_code()))
    }

    /// Salary statistics for live employees in a country, if any exist.
    pub async fn country_statistics(
        &self,
        country: &str,
    ) -> EngineResult<Option<SalaryStatistics>> {
        let key = country.trim().to_ascii_uppercase();
        let aggregate = self.repository.aggregate_by_country(&key).await?;
        Ok(summarize(GroupBy::Country, key, aggregate))
    }

    /// Salary statistics for live employees with a job title, if any exist.
    pub async fn job_title_statistics(
        &self,
        job_title: &str,
    ) -> EngineResult<Option<SalaryStatistics>> {
        let key = job_title.trim();
        let aggregate = self.repository.aggregate_by_job_title(key).await?;
        Ok(summarize(GroupBy::JobTitle, key, aggregate))
    }

    /// The bracket table that applies to a country code.
    pub fn tax_brackets(&self, country: &str) -> (CountryCode, &'static [TaxBracket]) {
        let code = CountryCode::parse(country);
        (code, brackets_for(code))
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
