//! Upstream response envelope
//!
//! Every upstream response, whether it carries a list, a single record or a
//! boolean, is wrapped as `{ data, status, error }`.

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Generic wrapper around an upstream payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, treating a missing `data` field as an upstream failure.
    ///
    /// `operation` names the call in the resulting error message.
    pub fn into_data(self, operation: &str) -> Result<T> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiError::Upstream(match self.error {
                Some(reason) => format!("{} returned no data: {}", operation, reason),
                None => format!("{} returned an empty response", operation),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_bool() {
        let json = r#"{"data": true, "status": "Successfully processed request."}"#;
        let envelope: Envelope<bool> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "Successfully processed request.");
        assert!(envelope.error.is_none());
        assert!(envelope.into_data("delete").unwrap());
    }

    #[test]
    fn test_envelope_with_list() {
        let json = r#"{"data": [1, 2, 3], "status": "ok"}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data("list").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_null_data_is_upstream_error() {
        let json = r#"{"data": null, "status": "Failed", "error": "boom"}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        let err = envelope.into_data("list employees").unwrap_err();
        match err {
            ApiError::Upstream(msg) => {
                assert!(msg.contains("list employees"));
                assert!(msg.contains("boom"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let envelope: Envelope<bool> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.status.is_empty());
        assert!(matches!(
            envelope.into_data("delete"),
            Err(ApiError::Upstream(_))
        ));
    }

    #[test]
    fn test_record_envelope_without_data() {
        // UpstreamEmployee has no Default impl
        let json = r#"{"status": "Failed", "error": "Too Many Requests"}"#;
        let envelope: Envelope<crate::models::UpstreamEmployee> =
            serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Too Many Requests"));
        assert!(matches!(
            envelope.into_data("create employee"),
            Err(ApiError::Upstream(_))
        ));
    }
}
