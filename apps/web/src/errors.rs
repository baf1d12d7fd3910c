use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs server-side failures. Provider failures are classified here only;
    /// callers all see the same generic message.
    pub fn log(&self) {
        if let AppError::Llm(e) = self {
            tracing::error!("LLM error: {e}");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let (code, message) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Llm(_) => (
                "LLM_ERROR",
                "An AI processing error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_failures_are_undifferentiated() {
        let auth = AppError::from(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });
        let empty = AppError::from(LlmError::EmptyCompletion);
        let missing = AppError::from(LlmError::MissingApiKey);

        for err in [auth, empty, missing] {
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_not_found_status() {
        let err = AppError::NotFound("/nope".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
