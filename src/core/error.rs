//! Typed errors for the invoke boundary.

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;

/// Errors the invoke handler can surface.
///
/// Malformed input is never folded into a business response; it propagates
/// through Actix's standard error path and reaches the caller as a
/// plain-text client error with no envelope body.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Request body was not a JSON object matching the request envelope.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ResponseError for InvokeError {
    fn status_code(&self) -> StatusCode {
        match self {
            InvokeError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}
