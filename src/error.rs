use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::generate::composer::ComposeError;
use crate::ErrorResponse;

/// Errors surfaced by the template and generation operations.
///
/// Field path resolution failures are deliberately absent: they are
/// recovered silently by falling back to the field's default value, so a
/// single bad mapping never aborts a generation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or incomplete request; never retried.
    #[error("{0}")]
    Validation(String),
    /// Referenced template or user does not exist.
    #[error("{0}")]
    NotFound(String),
    /// PDF rendering failed after all fields were resolved; fatal for the
    /// request, no partial document is returned.
    #[error("PDF composition failed: {0}")]
    Composition(#[from] ComposeError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Composition(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(message) => ErrorResponse::bad_request(message),
            ServiceError::NotFound(message) => ErrorResponse::not_found(message),
            ServiceError::Composition(_) | ServiceError::Internal(_) => {
                ErrorResponse::internal_error(&self.to_string())
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
