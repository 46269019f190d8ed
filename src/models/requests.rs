//! Request DTOs for the employee API
//!
//! Defines incoming facade request bodies and the bodies sent upstream.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Youngest accepted employee age
pub const MIN_AGE: u32 = 16;

/// Oldest accepted employee age
pub const MAX_AGE: u32 = 75;

/// Request body for the create operation (POST /)
///
/// Values arrive as strings; numbers are accepted too and read as their
/// decimal text. Missing fields are reported by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: Option<String>,
}

impl CreateEmployeeRequest {
    /// Creates a request from string values.
    pub fn new(
        name: impl Into<String>,
        salary: impl Into<String>,
        age: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            salary: Some(salary.into()),
            age: Some(age.into()),
            title: Some(title.into()),
        }
    }

    /// Validates the request and converts it into an upstream payload.
    ///
    /// Every failing field is listed in the returned error.
    pub fn validate(&self) -> Result<EmployeeInput> {
        let mut problems = Vec::new();

        let name = non_blank(self.name.as_deref());
        if name.is_none() {
            problems.push("name: must not be blank".to_string());
        }

        let salary = self
            .salary
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|s| *s > 0);
        if salary.is_none() {
            problems.push("salary: must be a positive integer".to_string());
        }

        let age = self
            .age
            .as_deref()
            .and_then(|a| a.trim().parse::<u32>().ok())
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a));
        if age.is_none() {
            problems.push(format!(
                "age: must be an integer between {} and {}",
                MIN_AGE, MAX_AGE
            ));
        }

        let title = non_blank(self.title.as_deref());
        if title.is_none() {
            problems.push("title: must not be blank".to_string());
        }

        match (name, salary, age, title) {
            (Some(name), Some(salary), Some(age), Some(title)) => Ok(EmployeeInput {
                name,
                salary,
                age,
                title,
            }),
            _ => Err(ApiError::Validation(problems.join("; "))),
        }
    }
}

/// Validated creation payload, sent upstream as `{name, salary, age, title}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
}

/// Body of the upstream delete call; upstream deletes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

impl DeleteEmployeeInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
