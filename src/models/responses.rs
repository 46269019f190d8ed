//! Response DTOs for the employee API
//!
//! Defines the structure of outgoing HTTP response bodies.

use axum::http::StatusCode;
use serde::Serialize;

/// Result of a delete request (DELETE /:id)
///
/// Rendered to callers as a plain status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed the deletion of the named employee
    Deleted(String),
    /// Upstream answered but did not confirm the deletion
    Failed,
    /// No employee with the requested id exists
    NotFound,
}

impl DeleteOutcome {
    /// Status message returned to the caller
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Deleted(name) => format!("Employee {} has been deleted", name),
            DeleteOutcome::Failed => "Failed to delete employee".to_string(),
            DeleteOutcome::NotFound => "Employee does not exist".to_string(),
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by write invalidation
    pub evictions: u64,
    /// Number of whole-cache flushes
    pub flushes: u64,
    /// Current number of entries across both scopes
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// When the employee list was last cached, if it is cached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_cached_at: Option<String>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, flushes: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            flushes,
            total_entries,
            hit_rate,
            list_cached_at: None,
        }
    }

    /// Attaches the list entry's timestamp
    pub fn with_list_cached_at(mut self, cached_at: Option<chrono::DateTime<chrono::Utc>>) -> Self {
        self.list_cached_at = cached_at.map(|t| t.to_rfc3339());
        self
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Numeric HTTP status
    pub status: u16,
    /// Reason phrase of the status
    pub error: String,
    /// What went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
        }
    }
}
