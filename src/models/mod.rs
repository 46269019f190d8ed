//! Request and Response models for the employee API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing facade request bodies, facade responses,
//! and the upstream service's wire format.

pub mod employee;
pub mod envelope;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::{Employee, UpstreamEmployee};
pub use envelope::Envelope;
pub use requests::{CreateEmployeeRequest, DeleteEmployeeInput, EmployeeInput};
pub use responses::{DeleteOutcome, ErrorResponse, HealthResponse, StatsResponse};
