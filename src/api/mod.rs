//! HTTP API module for the salary engine.
//!
//! This module provides the REST endpoints for managing employee records,
//! computing salary breakdowns, and reporting salary statistics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEmployeeRequest, ListEmployeesQuery, UpdateEmployeeRequest};
pub use response::{
    ApiError, ApiErrorResponse, DeductionResponse, EmployeeListResponse, HealthResponse,
    SalaryBreakdownResponse, TaxBracketsResponse,
};
pub use state::AppState;
