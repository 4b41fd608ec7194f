use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::settings::SettingsError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status, machine-readable code and user-facing message.
    ///
    /// Provider failures are split so the UI can tell "no key configured"
    /// apart from "provider rejected the request" and "could not reach it".
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(LlmError::Configuration(tier)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CONFIGURATION_ERROR",
                format!(
                    "Unknown service tier '{tier}'. Choose budget, standard or premium in settings."
                ),
            ),
            AppError::Llm(LlmError::MissingCredential(provider)) => (
                StatusCode::BAD_REQUEST,
                "CREDENTIAL_ERROR",
                format!(
                    "No {} API key configured. Add one in settings.",
                    provider.display_name()
                ),
            ),
            AppError::Llm(LlmError::Provider {
                provider,
                status,
                status_text,
            }) => {
                tracing::warn!("{} rejected the request with HTTP {status}", provider.display_name());
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    format!(
                        "{} rejected the request: {status_text}",
                        provider.display_name()
                    ),
                )
            }
            AppError::Llm(LlmError::Http(e)) => {
                tracing::error!("LLM transport error: {e}");
                let status = if e.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (
                    status,
                    "TRANSPORT_ERROR",
                    "Could not reach the LLM provider. Check your network connection.".to_string(),
                )
            }
            AppError::Settings(e) => {
                tracing::error!("Settings error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SETTINGS_ERROR",
                    "Settings could not be read or saved".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "status": "error",
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::providers::LlmProvider;

    #[test]
    fn test_missing_key_message_names_provider() {
        let (status, code, message) =
            AppError::from(LlmError::MissingCredential(LlmProvider::Anthropic)).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "CREDENTIAL_ERROR");
        assert!(message.contains("No Anthropic API key configured"));
    }

    #[test]
    fn test_provider_rejection_is_distinct_from_missing_key() {
        let (status, code, message) = AppError::from(LlmError::Provider {
            provider: LlmProvider::OpenAi,
            status: 401,
            status_text: "Unauthorized".to_string(),
        })
        .parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "PROVIDER_ERROR");
        assert_eq!(message, "OpenAI rejected the request: Unauthorized");
    }

    #[test]
    fn test_unknown_tier_is_configuration_error() {
        let (status, code, message) =
            AppError::from(LlmError::Configuration("gold".to_string())).parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "CONFIGURATION_ERROR");
        assert!(message.contains("'gold'"));
    }

    #[test]
    fn test_validation_error_passes_message_through() {
        let (status, code, message) =
            AppError::Validation("html cannot be empty".to_string()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "html cannot be empty");
    }
}
