//! Employee model and related types.
//!
//! This module defines the persisted [`Employee`] record together with the
//! input types used to create and patch it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, CountryCode};

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, stored lowercase and unique among live records.
    pub email: String,
    /// Job title used for aggregate reporting.
    pub job_title: String,
    /// Two-letter country code, if any.
    pub country: Option<String>,
    /// Annual gross salary in cents.
    pub salary_cents: Cents,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the record was soft-deleted, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Returns true if the employee has been soft-deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use salary_engine::models::Employee;
    /// use uuid::Uuid;
    ///
    /// let now = Utc::now();
    /// let mut employee = Employee {
    ///     id: Uuid::new_v4(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     job_title: "Engineer".to_string(),
    ///     country: Some("UK".to_string()),
    ///     salary_cents: 9_000_000,
    ///     created_at: now,
    ///     updated_at: now,
    ///     deleted_at: None,
    /// };
    /// assert!(!employee.is_deleted());
    /// employee.deleted_at = Some(now);
    /// assert!(employee.is_deleted());
    /// ```
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the country tag that selects this employee's deduction rules.
    pub fn country_code(&self) -> CountryCode {
        CountryCode::from_optional(self.country.as_deref())
    }
}

/// The fields required to create an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Job title.
    pub job_title: String,
    /// Two-letter country code, if any.
    pub country: Option<String>,
    /// Annual gross salary in cents.
    pub salary_cents: Cents,
}

/// A partial update to an employee. `None` leaves a field unchanged.
///
/// `country` is doubly optional: `Some(None)` clears the country.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New job title.
    pub job_title: Option<String>,
    /// New country, or `Some(None)` to clear it.
    pub country: Option<Option<String>>,
    /// New annual gross salary in cents.
    pub salary_cents: Option<Cents>,
}

impl EmployeeUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.job_title.is_none()
            && self.country.is_none()
            && self.salary_cents.is_none()
    }

    /// Applies the update to an employee in place, stamping `updated_at`.
    pub fn apply_to(self, employee: &mut Employee, now: DateTime<Utc>) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(job_title) = self.job_title {
            employee.job_title = job_title;
        }
        if let Some(country) = self.country {
            employee.country = country;
        }
        if let Some(salary_cents) = self.salary_cents {
            employee.salary_cents = salary_cents;
        }
        employee.updated_at = now;
    }
}
