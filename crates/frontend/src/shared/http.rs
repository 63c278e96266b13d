//! Request plumbing shared by every API module.
//!
//! Each request is bounded by the configured timeout: an `AbortController` is
//! tripped by a timer, and the aborted fetch surfaces as `ApiError::Timeout`.
//! The body is read inside the same bound.

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::error::ApiError;
use contracts::system::auth::Session;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortController;

use crate::shared::api_utils::api_url;
use crate::shared::config::config;

/// Fully read response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn non-2xx statuses into `Unauthorized` / `ServerRejection`
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.body))
        }
    }

    /// Body as JSON; an empty body reads as `null`
    pub fn json_value(&self) -> Result<Value, ApiError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

fn with_auth(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
    match session {
        Some(session) => builder.header("Authorization", &session.bearer()),
        None => builder,
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Malformed(format!("Failed to serialize request: {}", e)))
}

async fn execute(builder: RequestBuilder, payload: Option<String>) -> Result<ApiResponse, ApiError> {
    let timeout_ms = config().request_timeout_ms;
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("AbortController unavailable".to_string()))?;

    let timed_out = Rc::new(Cell::new(false));
    let _timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let signal = controller.signal();
    let builder = builder.abort_signal(Some(&signal));
    let request = match payload {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;

    let outcome = async {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok::<_, gloo_net::Error>(ApiResponse { status, body })
    }
    .await;

    match outcome {
        Ok(response) => Ok(response),
        Err(_) if timed_out.get() => Err(ApiError::Timeout {
            after_ms: timeout_ms,
        }),
        Err(e) => Err(ApiError::Network(format!("Failed to send request: {}", e))),
    }
}

pub async fn get(path: &str, session: Option<&Session>) -> Result<ApiResponse, ApiError> {
    let builder = with_auth(Request::get(&api_url(path)), session);
    execute(builder, None).await?.error_for_status()
}

pub async fn post<B: Serialize + ?Sized>(
    path: &str,
    body: &B,
    session: Option<&Session>,
) -> Result<ApiResponse, ApiError> {
    let payload = encode(body)?;
    let builder = with_auth(Request::post(&api_url(path)), session);
    execute(builder, Some(payload)).await?.error_for_status()
}

pub async fn patch<B: Serialize + ?Sized>(
    path: &str,
    body: &B,
    session: Option<&Session>,
) -> Result<ApiResponse, ApiError> {
    let payload = encode(body)?;
    let builder = with_auth(Request::patch(&api_url(path)), session);
    execute(builder, Some(payload)).await?.error_for_status()
}
