//! Upstream Client Module
//!
//! Talks to the upstream employee service. Every response arrives wrapped in
//! an [`Envelope`]; HTTP-level failures surface as typed [`ApiError`]s.
//!
//! [`ApiError`]: crate::error::ApiError

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpEmployeeClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DeleteEmployeeInput, EmployeeInput, Envelope, UpstreamEmployee};

// == Employee Client ==
/// Operations offered by the upstream employee service.
#[async_trait]
pub trait EmployeeClient: Send + Sync {
    /// Fetches every employee.
    async fn fetch_all(&self) -> Result<Envelope<Vec<UpstreamEmployee>>>;

    /// Fetches a single employee. `Ok(None)` when upstream reports 404.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Envelope<UpstreamEmployee>>>;

    /// Creates an employee and returns the stored record.
    async fn create(&self, input: &EmployeeInput) -> Result<Envelope<UpstreamEmployee>>;

    /// Deletes an employee by name; `data` tells whether anything was deleted.
    async fn delete_by_name(&self, input: &DeleteEmployeeInput) -> Result<Envelope<bool>>;
}
