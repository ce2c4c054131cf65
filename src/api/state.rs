//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::service::EmployeeService;
use crate::storage::{EmployeeRepository, InMemoryEmployeeRepository};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers. Cloning
/// is cheap; the service holds its repository and configuration behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService,
}

impl AppState {
    /// Creates a new application state around an employee service.
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Creates a state backed by the given repository.
    pub fn with_repository(
        repository: Arc<dyn EmployeeRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self::new(EmployeeService::new(repository, Arc::new(config)))
    }

    /// Creates a state backed by a fresh in-memory repository.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::with_repository(Arc::new(InMemoryEmployeeRepository::new()), config)
    }

    /// Returns the employee service.
    pub fn service(&self) -> &EmployeeService {
        &self.service
    }
}
