//! Task API Bindings
//!
//! Frontend wrappers around the remote todo endpoints, built on the browser
//! fetch API. Each call is attempted exactly once; callers decide how a
//! failure is surfaced.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Todo;

/// Endpoint shared by the list and create calls.
pub const TODOS_ENDPOINT: &str = "/api/todos";

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with an unexpected status. `message` carries the
    /// body's `error` field when the server sent one.
    #[error("HTTP error! Status: {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a usable response (connection failure,
    /// malformed body).
    #[error("{0}")]
    Network(String),
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
pub struct NewTodo<'a> {
    pub task: &'a str,
}

/// Error body shape the API uses for rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// ========================
// API Calls
// ========================

/// `GET /api/todos` - the full task list, in server order.
pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let request = Request::new_with_str(TODOS_ENDPOINT)
        .map_err(|value| ApiError::Network(js_error_message(&value)))?;
    let response = send(request).await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: None,
        });
    }

    let body = json_body(&response).await?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Network(e.to_string()))
}

/// `POST /api/todos` - create one task. Anything but `201 Created` is an
/// error; the server's `error` field is pulled out of the body when present.
pub async fn create_todo(args: &NewTodo<'_>) -> Result<(), ApiError> {
    let body = serde_json::to_string(args).map_err(|e| ApiError::Network(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(TODOS_ENDPOINT, &init)
        .map_err(|value| ApiError::Network(js_error_message(&value)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|value| ApiError::Network(js_error_message(&value)))?;

    let response = send(request).await?;
    if response.status() == 201 {
        return Ok(());
    }

    let message = error_field(&response).await;
    Err(ApiError::Status {
        status: response.status(),
        message,
    })
}

// ========================
// Fetch Plumbing
// ========================

async fn send(request: Request) -> Result<Response, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|value| ApiError::Network(js_error_message(&value)))?;
    response
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".to_string()))
}

async fn json_body(response: &Response) -> Result<JsValue, ApiError> {
    let promise = response
        .json()
        .map_err(|value| ApiError::Network(js_error_message(&value)))?;
    JsFuture::from(promise)
        .await
        .map_err(|value| ApiError::Network(js_error_message(&value)))
}

/// Best-effort read of the `error` field from a rejection body.
async fn error_field(response: &Response) -> Option<String> {
    let body = json_body(response).await.ok()?;
    let parsed: ErrorBody = serde_wasm_bindgen::from_value(body).ok()?;
    parsed.error
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}
