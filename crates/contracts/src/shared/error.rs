use serde_json::Value;
use thiserror::Error;

use crate::usecases::u501_book_appointment::BookingValidationError;

pub const HTTP_UNAUTHORIZED: u16 = 401;

/// Every way a call against the booking API can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },

    #[error("not authorized")]
    Unauthorized,

    #[error("validation failed: {0}")]
    Validation(#[from] BookingValidationError),

    #[error("server rejected the request (status {status})")]
    ServerRejection { status: u16, message: Option<String> },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Classify a non-success HTTP response
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == HTTP_UNAUTHORIZED {
            return ApiError::Unauthorized;
        }
        ApiError::ServerRejection {
            status,
            message: extract_message(body),
        }
    }

    /// A missing or expired session; the caller must drop the session
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text shown to the user in notices
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Falha de conexão com o servidor.".to_string(),
            ApiError::Timeout { .. } => "O servidor demorou demais para responder.".to_string(),
            ApiError::Unauthorized => "Sessão expirada. Faça login novamente.".to_string(),
            ApiError::Validation(e) => e.to_string(),
            ApiError::ServerRejection {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::ServerRejection { status, .. } => {
                format!("O servidor recusou a solicitação ({}).", status)
            }
            ApiError::Malformed(_) => "Resposta inesperada do servidor.".to_string(),
        }
    }
}

/// Pull the `mensagem` field out of a response body.
///
/// The API sometimes returns the payload JSON-encoded a second time (a JSON string
/// holding an object), so one level of string nesting is unwrapped.
pub fn extract_message(body: &str) -> Option<String> {
    let mut value: Value = serde_json::from_str(body).ok()?;
    if let Value::String(inner) = &value {
        value = serde_json::from_str(inner).ok()?;
    }
    value
        .get("mensagem")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
