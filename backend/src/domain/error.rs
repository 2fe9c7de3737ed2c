//! Error response types.
//!
//! These types are transport agnostic; the inbound HTTP adapter maps them
//! to status codes and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A dependency of the service is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// API error response payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code, ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "employee not found for id 7")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. the violated field names of a
    /// rejected payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the
    /// error payload is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "fields": ["title"] }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Tests for error payload construction and trace correlation.

    use super::*;
    use crate::middleware::trace::TraceId;
    use serde_json::json;

    #[test]
    fn constructors_set_codes() {
        let cases = [
            (Error::invalid_request("bad"), ErrorCode::InvalidRequest),
            (Error::not_found("missing"), ErrorCode::NotFound),
            (
                Error::service_unavailable("down"),
                ErrorCode::ServiceUnavailable,
            ),
            (Error::internal("boom"), ErrorCode::InternalError),
        ];
        for (err, code) in cases {
            assert_eq!(err.code, code);
        }
    }

    #[test]
    fn details_round_trip_through_json() {
        let err = Error::invalid_request("bad").with_details(json!({ "fields": ["title"] }));
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["details"]["fields"][0], "title");
        assert!(value.get("traceId").is_none());
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let expected = trace_id.to_string();
        let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;
        assert_eq!(error.trace_id.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn new_leaves_trace_id_empty_out_of_scope() {
        let error = Error::internal("boom");
        assert!(error.trace_id.is_none());
    }
}
