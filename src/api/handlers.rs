//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::has_deductions;
use crate::error::EngineError;

use super::request::{CreateEmployeeRequest, ListEmployeesQuery, UpdateEmployeeRequest};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeListResponse, HealthResponse, SalaryBreakdownResponse,
    TaxBracketsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .patch(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/:id/restore", post(restore_employee_handler))
        .route("/employees/:id/salary", get(salary_breakdown_handler))
        .route("/metrics/countries/:country", get(country_metrics_handler))
        .route(
            "/metrics/job-titles/:job_title",
            get(job_title_metrics_handler),
        )
        .route("/tax-brackets/:country", get(tax_brackets_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn bad_request(error: ApiError) -> Response {
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

fn parse_id(correlation_id: Uuid, raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| {
        warn!(correlation_id = %correlation_id, id = %raw, "Invalid employee id");
        bad_request(ApiError::invalid_id(raw))
    })
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    bad_request(error)
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().create(request.into()).await {
        Ok(employee) => json_response(StatusCode::CREATED, employee),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return bad_request(ApiError::validation_error(rejection.body_text()));
        }
    };

    match state.service().list(query.into()).await {
        Ok(page) => {
            info!(
                correlation_id = %correlation_id,
                total = page.total,
                returned = page.items.len(),
                "Employees listed"
            );
            json_response(StatusCode::OK, EmployeeListResponse::from(page))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/{id}.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_id(correlation_id, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service().get(id).await {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for PATCH /employees/{id}.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id = %raw_id, "Processing update employee request");

    let id = match parse_id(correlation_id, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().update(id, request.into()).await {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_id(correlation_id, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /employees/{id}/restore.
async fn restore_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_id(correlation_id, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service().restore(id).await {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/{id}/salary.
///
/// Returns the tax, insurance and retirement breakdown of the employee's
/// stored gross salary.
async fn salary_breakdown_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_id(correlation_id, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match state.service().salary_breakdown(id).await {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                gross_cents = breakdown.gross_cents,
                net_cents = breakdown.net_cents,
                duration_us = start_time.elapsed().as_micros(),
                "Salary breakdown calculated"
            );
            json_response(StatusCode::OK, SalaryBreakdownResponse::from(breakdown))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /metrics/countries/{country}.
async fn country_metrics_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().country_statistics(&country).await {
        Ok(Some(stats)) => json_response(StatusCode::OK, stats),
        Ok(None) => ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::no_statistics("country", &country),
        )
        .into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /metrics/job-titles/{job_title}.
async fn job_title_metrics_handler(
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().job_title_statistics(&job_title).await {
        Ok(Some(stats)) => json_response(StatusCode::OK, stats),
        Ok(None) => ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::no_statistics("job title", &job_title),
        )
        .into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /tax-brackets/{country}.
async fn tax_brackets_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Response {
    let (code, brackets) = state.service().tax_brackets(&country);
    json_response(
        StatusCode::OK,
        TaxBracketsResponse {
            country: code,
            has_deductions: has_deductions(code),
            brackets: brackets.to_vec(),
        },
    )
}
