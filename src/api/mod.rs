//! REST Client
//!
//! Thin `fetch` wrappers over the clinic backend, organized by domain.
//! Same-origin requests, so the session cookie travels with them.

mod catalog;
mod forms;
mod patients;
mod schedule;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use catalog::*;
pub use forms::*;
pub use patients::*;
pub use schedule::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    fn network(value: JsValue) -> Self {
        ApiError::Network(format!("{:?}", value))
    }

    fn decode(value: JsValue) -> Self {
        ApiError::Decode(format!("{:?}", value))
    }
}

/// Perform `request`; anything but a 2xx status is an error
async fn send(request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value.dyn_into().map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::decode)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::decode)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::network)?;
    read_json(send(request).await?).await
}

pub(crate) async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(ApiError::network)?;
    headers.set("Accept", "application/json").map_err(ApiError::network)?;
    read_json(send(request).await?).await
}
