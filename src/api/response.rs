//! Response types for the salary engine API.
//!
//! This module defines the JSON response bodies, the error response
//! structure, and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    Cents, CountryCode, Deduction, DeductionKind, Employee, SalaryBreakdown, TaxBracket,
};
use crate::storage::EmployeePage;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid id error response.
    pub fn invalid_id(raw: &str) -> Self {
        Self::with_details(
            "INVALID_ID",
            format!("Invalid employee id: {}", raw),
            "Employee ids are UUIDs",
        )
    }

    /// Creates a not found error for an aggregate group with no employees.
    pub fn no_statistics(group: &str, key: &str) -> Self {
        Self::new(
            "NO_STATISTICS",
            format!("No employees found for {} '{}'", group, key),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::EmployeeNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
            ),
            EngineError::DuplicateEmail { email } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DUPLICATE_EMAIL",
                    format!("Email already in use: {}", email),
                    "Another active employee has this email address",
                ),
            ),
            EngineError::InvalidEmployee { field, message } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            ),
            EngineError::EmployeeNotDeleted { id } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new(
                    "EMPLOYEE_NOT_DELETED",
                    format!("Employee is not deleted: {}", id),
                ),
            ),
        }
    }
}

fn presentation_percentage(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// One deduction in a salary breakdown response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionResponse {
    /// The deduction kind.
    #[serde(rename = "type")]
    pub kind: DeductionKind,
    /// The deducted amount in cents.
    pub amount_cents: Cents,
    /// Share of gross salary in percent, rounded to two places.
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    /// Human-readable description.
    pub description: String,
}

impl From<Deduction> for DeductionResponse {
    fn from(deduction: Deduction) -> Self {
        Self {
            kind: deduction.kind,
            amount_cents: deduction.amount_cents,
            percentage: presentation_percentage(deduction.percentage),
            description: deduction.description,
        }
    }
}

/// Response body for `GET /employees/{id}/salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdownResponse {
    /// Effective gross salary in cents.
    pub gross_salary_cents: Cents,
    /// Tax, insurance and retirement deductions in that order.
    pub deductions: Vec<DeductionResponse>,
    /// Sum of all deductions.
    pub total_deductions_cents: Cents,
    /// Gross minus deductions.
    pub net_salary_cents: Cents,
}

impl From<SalaryBreakdown> for SalaryBreakdownResponse {
    fn from(breakdown: SalaryBreakdown) -> Self {
        Self {
            gross_salary_cents: breakdown.gross_cents,
            deductions: breakdown.deductions.into_iter().map(Into::into).collect(),
            total_deductions_cents: breakdown.total_deductions_cents,
            net_salary_cents: breakdown.net_cents,
        }
    }
}

/// Response body for `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    /// Employees on this page.
    pub items: Vec<Employee>,
    /// Total number of matching employees.
    pub total: usize,
    /// One-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
}

impl From<EmployeePage> for EmployeeListResponse {
    fn from(page: EmployeePage) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// Response body for `GET /tax-brackets/{country}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracketsResponse {
    /// The resolved country tag.
    pub country: CountryCode,
    /// Whether any deductions apply in this country.
    pub has_deductions: bool,
    /// The ordered brackets.
    pub brackets: Vec<TaxBracket>,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
