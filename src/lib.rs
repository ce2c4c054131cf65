//! Salary Engine
//!
//! This crate provides an HTTP API for employee records together with a
//! salary deduction engine: progressive tax brackets, capped insurance and
//! retirement deductions, and aggregate salary reporting, all computed in
//! integer cents.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod storage;
