use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to bind voice webhook parameters: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
    #[error("failed to re-encode voice webhook parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
    #[error("unsupported content type {0:?}, expected application/x-www-form-urlencoded")]
    UnsupportedMediaType(String),
    #[error("failed to read request body: {0}")]
    Body(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Form(_) | AppError::Body(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Encode(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "rejecting voice webhook");
        (self.status(), self.to_string()).into_response()
    }
}

pub fn handle_error(e: impl std::error::Error) {
    error!("ERROR: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::UnsupportedMediaType("application/json".to_string()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::Body("stream closed".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Config("bad".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
