use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Movie(#[from] MovieApiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Failures of the movie metadata providers.
///
/// Callers distinguish a provider that answered without a match from one
/// that could not be reached or returned garbage.
#[derive(thiserror::Error, Debug)]
pub enum MovieApiError {
    #[error("OMDB_API_KEY or TMDB_API_KEY must be configured")]
    NotConfigured,

    #[error("{0}")]
    NotFound(String),

    #[error("{provider} request failed")]
    RequestFailed { provider: &'static str },
}

/// An upstream HTTP call that failed in transport, status or decoding
#[derive(thiserror::Error, Debug)]
#[error("{provider} request failed: {reason}")]
pub struct ProviderError {
    pub provider: &'static str,
    pub reason: String,
}

impl From<ProviderError> for MovieApiError {
    fn from(err: ProviderError) -> Self {
        MovieApiError::RequestFailed {
            provider: err.provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::ExternalApi(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Movie(ref err) => {
                let status = match err {
                    MovieApiError::NotFound(_) => StatusCode::NOT_FOUND,
                    MovieApiError::RequestFailed { .. } => StatusCode::BAD_GATEWAY,
                    MovieApiError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                };
                (status, err.to_string())
            }
            AppError::Io(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
