//! Employee API - A REST facade over the mock employee service
//!
//! Proxies CRUD calls upstream, renames fields into the facade schema,
//! caches reads until the next write, and answers simple salary analytics.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use error::ApiError;
pub use service::EmployeeService;
