//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream employee service
    pub upstream_base_url: String,
    /// Path of the upstream list/create/delete endpoint
    pub employees_endpoint: String,
    /// Path template of the upstream by-id endpoint; `{id}` is substituted
    pub employee_by_id_endpoint: String,
    /// Timeout in seconds applied to every upstream request
    pub upstream_timeout_secs: u64,
    /// Whether single-employee lookups are cached
    pub cache_by_id: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8111)
    /// - `UPSTREAM_BASE_URL` - Upstream base URL (default: http://localhost:8112/api/v1)
    /// - `UPSTREAM_EMPLOYEES_ENDPOINT` - List/create/delete path (default: /employees)
    /// - `UPSTREAM_EMPLOYEE_BY_ID_ENDPOINT` - By-id path template (default: /employee/{id})
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    /// - `CACHE_BY_ID` - Cache single-employee lookups (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            employees_endpoint: env::var("UPSTREAM_EMPLOYEES_ENDPOINT")
                .unwrap_or(defaults.employees_endpoint),
            employee_by_id_endpoint: env::var("UPSTREAM_EMPLOYEE_BY_ID_ENDPOINT")
                .ok()
                .filter(|v| v.contains("{id}"))
                .unwrap_or(defaults.employee_by_id_endpoint),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.upstream_timeout_secs),
            cache_by_id: parse_var("CACHE_BY_ID").unwrap_or(defaults.cache_by_id),
        }
    }

    /// Upstream request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8111,
            upstream_base_url: "http://localhost:8112/api/v1".to_string(),
            employees_endpoint: "/employees".to_string(),
            employee_by_id_endpoint: "/employee/{id}".to_string(),
            upstream_timeout_secs: 10,
            cache_by_id: true,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
