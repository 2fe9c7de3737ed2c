//! HTTP mapping for the error envelope.
//!
//! Keeps the domain free of transport concerns by translating
//! [`Error`](crate::domain::Error) into Actix responses here.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode};

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ErrorCode {
    fn as_status_code(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.code.as_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header(("trace-id", id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            // Do not leak implementation details to clients.
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}
