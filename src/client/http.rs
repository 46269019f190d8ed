//! HTTP implementation of the upstream client, built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::EmployeeClient;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DeleteEmployeeInput, EmployeeInput, Envelope, UpstreamEmployee};

/// Placeholder substituted by the employee id in path templates
const ID_PLACEHOLDER: &str = "{id}";

// == Http Employee Client ==
/// Upstream client that issues real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    http: reqwest::Client,
    base_url: String,
    employees_endpoint: String,
    employee_by_id_endpoint: String,
}

impl HttpEmployeeClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Absolute base URL, e.g. `http://localhost:8112/api/v1`
    /// * `employees_endpoint` - Path of the list/create/delete endpoint
    /// * `employee_by_id_endpoint` - Path template containing `{id}`
    /// * `timeout` - Applied to every request
    pub fn new(
        base_url: &str,
        employees_endpoint: &str,
        employee_by_id_endpoint: &str,
        timeout: Duration,
    ) -> Result<Self> {
        Url::parse(base_url).map_err(|e| {
            ApiError::Internal(format!("Invalid upstream base URL '{}': {}", base_url, e))
        })?;
        if !employee_by_id_endpoint.contains(ID_PLACEHOLDER) {
            return Err(ApiError::Internal(format!(
                "Employee-by-id endpoint '{}' has no {} placeholder",
                employee_by_id_endpoint, ID_PLACEHOLDER
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            employees_endpoint: employees_endpoint.to_string(),
            employee_by_id_endpoint: employee_by_id_endpoint.to_string(),
        })
    }

    /// Creates a client from the upstream settings in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.upstream_base_url,
            &config.employees_endpoint,
            &config.employee_by_id_endpoint,
            config.upstream_timeout(),
        )
    }

    fn employees_url(&self) -> String {
        format!("{}{}", self.base_url, self.employees_endpoint)
    }

    fn employee_url(&self, id: &str) -> String {
        let path = self
            .employee_by_id_endpoint
            .replace(ID_PLACEHOLDER, &urlencoding::encode(id));
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn fetch_all(&self) -> Result<Envelope<Vec<UpstreamEmployee>>> {
        let url = self.employees_url();
        info!("Fetching all employees from {}", url);

        let response = self.http.get(&url).send().await?;
        read_envelope(response, "List employees").await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Envelope<UpstreamEmployee>>> {
        if is_dot_segment(id) {
            warn!("Rejected dot-segment employee id: {:?}", id);
            return Ok(None);
        }
        let url = self.employee_url(id);
        debug!("Fetching employee {} from {}", id, url);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("Employee not found for id: {}", id);
            return Ok(None);
        }
        read_envelope(response, "Get employee").await.map(Some)
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Envelope<UpstreamEmployee>> {
        let url = self.employees_url();
        info!("Creating employee '{}' via {}", input.name, url);

        let response = self.http.post(&url).json(input).send().await?;
        read_envelope(response, "Create employee").await
    }

    async fn delete_by_name(&self, input: &DeleteEmployeeInput) -> Result<Envelope<bool>> {
        let url = self.employees_url();
        info!("Deleting employee '{}' via {}", input.name, url);

        let response = self.http.delete(&url).json(input).send().await?;
        read_envelope(response, "Delete employee").await
    }
}

/// Maps the HTTP status to an error or decodes the envelope.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
    operation: &str,
) -> Result<Envelope<T>> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        warn!(
            "{} was rate limited upstream, retry after: {:?}",
            operation, retry_after
        );
        return Err(ApiError::RateLimited { retry_after });
    }

    if !status.is_success() {
        return Err(ApiError::Upstream(format!(
            "{} failed with upstream status {}",
            operation, status
        )));
    }

    Ok(response.json::<Envelope<T>>().await?)
}

/// Ids that URL normalization would resolve away instead of substituting.
fn is_dot_segment(id: &str) -> bool {
    matches!(id, "." | "..")
}
