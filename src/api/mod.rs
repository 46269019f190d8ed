//! API Module
//!
//! HTTP handlers and routing for the employee REST facade.
//!
//! # Endpoints
//! - `GET /` - List all employees
//! - `POST /` - Create an employee
//! - `GET /search/:name` - Search employees by name
//! - `GET /highestSalary` - Highest salary
//! - `GET /topTenHighestEarningEmployeeNames` - Names of the ten best paid employees
//! - `GET /:id` - Get an employee by id
//! - `DELETE /:id` - Delete an employee by id
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
