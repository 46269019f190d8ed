//! Employee records
//!
//! The upstream service prefixes every field with `employee_`; the facade
//! exposes the same record under plain field names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record as returned by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Employee record in the upstream service's naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamEmployee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u32,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email", default)]
    pub email: Option<String>,
}

impl From<UpstreamEmployee> for Employee {
    fn from(upstream: UpstreamEmployee) -> Self {
        Self {
            id: upstream.id,
            name: upstream.name,
            salary: upstream.salary,
            age: upstream.age,
            title: upstream.title,
            email: upstream.email,
        }
    }
}
