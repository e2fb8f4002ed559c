//! Error handling - every failure renders as the JSON error envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use quill_core::{DomainError, RepoError};
use quill_shared::ErrorResponse;

pub const POST_NOT_FOUND: &str = "Post not found";

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is missing or empty.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request body is not valid JSON for the route's schema.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The single storage call of a handler failed.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepoError,
    },
}

impl AppError {
    /// Map a repository failure, labelling it with what the handler was doing.
    ///
    /// `RepoError::NotFound` becomes a 404; every other kind is a 500.
    pub fn storage(context: &'static str) -> impl FnOnce(RepoError) -> AppError {
        move |err| match err {
            RepoError::NotFound => AppError::NotFound(POST_NOT_FOUND.to_string()),
            source => AppError::Storage { context, source },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => ErrorResponse::new(msg),
            AppError::MalformedBody(detail) => {
                ErrorResponse::new("Invalid request body").with_error(detail)
            }
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, "{}", context);
                ErrorResponse::new(*context).with_error(source.to_string())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// `JsonConfig` error handler: malformed or mistyped bodies become a 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::MalformedBody(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
