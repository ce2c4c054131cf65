//! In-memory employee repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{EmployeeFilter, EmployeePage, EmployeeRepository};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee, SalaryAggregate};

/// An [`EmployeeRepository`] backed by a vector held in process memory.
///
/// Records are kept in insertion order, which is also creation order. Every
/// write takes the write lock for its whole check-then-modify sequence, so
/// email uniqueness holds under concurrent writers.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(records: &[Employee], email: &str, except: Option<Uuid>) -> bool {
    records
        .iter()
        .any(|e| !e.is_deleted() && Some(e.id) != except && e.email.eq_ignore_ascii_case(email))
}

fn live_mut(records: &mut [Employee], id: Uuid) -> EngineResult<&mut Employee> {
    records
        .iter_mut()
        .find(|e| e.id == id && !e.is_deleted())
        .ok_or(EngineError::EmployeeNotFound { id })
}

fn matches(employee: &Employee, filter: &EmployeeFilter) -> bool {
    if !filter.include_deleted && employee.is_deleted() {
        return false;
    }
    if let Some(country) = &filter.country {
        match &employee.country {
            Some(c) if c.eq_ignore_ascii_case(country) => {}
            _ => return false,
        }
    }
    if let Some(job_title) = &filter.job_title {
        if !employee.job_title.eq_ignore_ascii_case(job_title) {
            return false;
        }
    }
    true
}

fn aggregate<'a>(employees: impl Iterator<Item = &'a Employee>) -> SalaryAggregate {
    let mut aggregate = SalaryAggregate::default();
    for employee in employees {
        aggregate.record(employee.salary_cents);
    }
    aggregate
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let mut records = self.records.write().await;
        if email_taken(&records, &employee.email, None) {
            return Err(EngineError::DuplicateEmail {
                email: employee.email,
            });
        }

        let now = Utc::now();
        let record = Employee {
            id: Uuid::new_v4(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            job_title: employee.job_title,
            country: employee.country,
            salary_cents: employee.salary_cents,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        records.push(record.clone());
        debug!(employee_id = %record.id, "Employee stored");
        Ok(record)
    }

    async fn find(&self, id: Uuid) -> EngineResult<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self, filter: &EmployeeFilter) -> EngineResult<EmployeePage> {
        let records = self.records.read().await;
        let matching: Vec<&Employee> = records.iter().filter(|e| matches(e, filter)).collect();
        let offset = filter.page.saturating_sub(1).saturating_mul(filter.limit);
        let items = matching
            .iter()
            .skip(offset)
            .take(filter.limit)
            .map(|e| (*e).clone())
            .collect();

        Ok(EmployeePage {
            items,
            total: matching.len(),
            page: filter.page,
            limit: filter.limit,
        })
    }

    async fn update(&self, id: Uuid, update: EmployeeUpdate) -> EngineResult<Employee> {
        let mut records = self.records.write().await;
        if !records.iter().any(|e| e.id == id && !e.is_deleted()) {
            return Err(EngineError::EmployeeNotFound { id });
        }
        if let Some(email) = &update.email {
            if email_taken(&records, email, Some(id)) {
                return Err(EngineError::DuplicateEmail {
                    email: email.clone(),
                });
            }
        }

        let employee = live_mut(&mut records, id)?;
        update.apply_to(employee, Utc::now());
        Ok(employee.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> EngineResult<()> {
        let mut records = self.records.write().await;
        let employee = live_mut(&mut records, id)?;
        let now = Utc::now();
        employee.deleted_at = Some(now);
        employee.updated_at = now;
        Ok(())
    }

    async fn restore(&self, id: Uuid) -> EngineResult<Employee> {
        let mut records = self.records.write().await;
        let email = match records.iter().find(|e| e.id == id) {
            None => return Err(EngineError::EmployeeNotFound { id }),
            Some(e) if !e.is_deleted() => return Err(EngineError::EmployeeNotDeleted { id }),
            Some(e) => e.email.clone(),
        };
        if email_taken(&records, &email, Some(id)) {
            return Err(EngineError::DuplicateEmail { email });
        }

        let employee = records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        employee.deleted_at = None;
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn aggregate_by_country(&self, country: &str) -> EngineResult<SalaryAggregate> {
        let records = self.records.read().await;
        Ok(aggregate(records.iter().filter(|e| {
            !e.is_deleted()
                && e.country
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(country))
        })))
    }

    async fn aggregate_by_job_title(&self, job_title: &str) -> EngineResult<SalaryAggregate> {
        let records = self.records.read().await;
        Ok(aggregate(records.iter().filter(|e| {
            !e.is_deleted() && e.job_title.eq_ignore_ascii_case(job_title)
        })))
    }
}
