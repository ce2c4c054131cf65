//! Request types for the salary engine API.
//!
//! This module defines the JSON request bodies and query strings for the
//! employee endpoints, and their conversions into domain types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{Cents, EmployeeUpdate, NewEmployee};
use crate::storage::EmployeeFilter;

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Job title.
    pub job_title: String,
    /// Two-letter country code; omitted or `null` means no country.
    #[serde(default)]
    pub country: Option<String>,
    /// Annual gross salary in cents. Must be an integer.
    pub salary_cents: Cents,
}

/// Request body for `PATCH /employees/{id}`.
///
/// Absent fields are left unchanged. `"country": null` clears the country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// New country; `Some(None)` when the request sent `null`.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<Option<String>>,
    /// New annual gross salary in cents.
    #[serde(default)]
    pub salary_cents: Option<Cents>,
}

// Distinguishes an explicit `null` from an absent field.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesQuery {
    /// Only employees in this country.
    #[serde(default)]
    pub country: Option<String>,
    /// Only employees with this job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Include soft-deleted employees.
    #[serde(default)]
    pub include_deleted: bool,
    /// One-based page number.
    #[serde(default)]
    pub page: Option<usize>,
    /// Page size.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            job_title: req.job_title,
            country: req.country,
            salary_cents: req.salary_cents,
        }
    }
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(req: UpdateEmployeeRequest) -> Self {
        EmployeeUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            job_title: req.job_title,
            country: req.country,
            salary_cents: req.salary_cents,
        }
    }
}

impl From<ListEmployeesQuery> for EmployeeFilter {
    fn from(query: ListEmployeesQuery) -> Self {
        EmployeeFilter {
            country: query.country,
            job_title: query.job_title,
            include_deleted: query.include_deleted,
            page: query.page.unwrap_or(1),
            // zero means "use the configured default"
            limit: query.limit.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_request() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "jobTitle": "Engineer",
            "country": "UK",
            "salaryCents": 9000000
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "Ada");
        assert_eq!(request.country.as_deref(), Some("UK"));
        assert_eq!(request.salary_cents, 9_000_000);
    }

    #[test]
    fn test_create_request_country_is_optional() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "jobTitle": "Engineer",
            "salaryCents": 9000000
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert!(request.country.is_none());
    }

    #[test]
    fn test_fractional_salary_is_rejected() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "jobTitle": "Engineer",
            "salaryCents": 100.5
        }"#;

        assert!(serde_json::from_str::<CreateEmployeeRequest>(json).is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent_country() {
        let absent: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"jobTitle": "Lead"}"#).unwrap();
        assert_eq!(absent.country, None);

        let cleared: UpdateEmployeeRequest = serde_json::from_str(r#"{"country": null}"#).unwrap();
        assert_eq!(cleared.country, Some(None));

        let set: UpdateEmployeeRequest = serde_json::from_str(r#"{"country": "IN"}"#).unwrap();
        assert_eq!(set.country, Some(Some("IN".to_string())));
    }

    #[test]
    fn test_update_conversion() {
        let req = UpdateEmployeeRequest {
            salary_cents: Some(123_456),
            country: Some(None),
            ..Default::default()
        };

        let update: EmployeeUpdate = req.into();
        assert_eq!(update.salary_cents, Some(123_456));
        assert_eq!(update.country, Some(None));
        assert!(update.email.is_none());
    }

    #[test]
    fn test_list_query_conversion_defaults() {
        let filter: EmployeeFilter = ListEmployeesQuery::default().into();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 0);
        assert!(!filter.include_deleted);
    }
}
