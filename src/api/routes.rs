//! API Routes
//!
//! Configures the Axum router with all employee API endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_employee_handler, delete_employee_handler, get_employee_handler,
    health_handler, highest_salary_handler, list_employees_handler, search_employees_handler,
    top_ten_names_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// Static paths such as `/highestSalary` take priority over `/:id`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(list_employees_handler).post(create_employee_handler))
        .route("/search/:name", get(search_employees_handler))
        .route("/highestSalary", get(highest_salary_handler))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(top_ten_names_handler),
        )
        .route("/health", get(health_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route(
            "/:id",
            get(get_employee_handler).delete(delete_employee_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
