//! API Handlers
//!
//! HTTP request handlers for each employee API endpoint.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{CreateEmployeeRequest, Employee, HealthResponse, StatsResponse};
use crate::service::EmployeeService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee service; clones share its client and cache
    pub service: EmployeeService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP upstream client and an empty cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(EmployeeService::from_config(config)?))
    }
}

/// Handler for GET /
pub async fn list_employees_handler(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    Ok(Json(state.service.list_all().await?))
}

/// Handler for GET /search/:name
///
/// Case-insensitive substring match on the employee name.
pub async fn search_employees_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    Ok(Json(state.service.search_by_name(&name).await?))
}

/// Handler for GET /:id
///
/// Unknown ids answer 404 with the standard error body.
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    state
        .service
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Employee {}", id)))
}

/// Handler for GET /highestSalary
pub async fn highest_salary_handler(State(state): State<AppState>) -> Result<Json<u32>> {
    Ok(Json(state.service.highest_salary().await?))
}

/// Handler for GET /topTenHighestEarningEmployeeNames
pub async fn top_ten_names_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.service.top_ten_names().await?))
}

/// Handler for POST /
///
/// Malformed JSON is reported as a validation failure rather than axum's
/// default rejection.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>)> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let created = state.service.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for DELETE /:id
///
/// Answers with a plain-text status message.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    Ok(state.service.delete(&id).await?.message())
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    let cache = cache.read().await;
    let stats = cache.stats();

    Json(
        StatsResponse::new(
            stats.hits,
            stats.misses,
            stats.evictions,
            stats.flushes,
            stats.total_entries,
        )
        .with_list_cached_at(cache.list_cached_at()),
    )
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
