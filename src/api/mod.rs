//! REST Client
//!
//! Frontend bindings to the server's JSON routes, organized by resource.
//! The helpers here only move JSON; interpreting `success` is left to callers.

mod ingredient;
mod menu;
mod recipe;
mod search;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ApiError;
use crate::models::ApiResponse;

// Re-export all public items
pub use ingredient::*;
pub use menu::*;
pub use recipe::*;
pub use search::*;

const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Absolute URL path for a route relative to the API root
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Best readable text for a rejected JS promise
fn js_error_text(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(js_error_text(&err))
}

async fn fetch_json<T: DeserializeOwned>(method: Method, path: &str, body: Option<String>) -> Result<T, ApiError> {
    let url = api_url(path);

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    request.headers().set("Accept", "application/json").map_err(transport)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json").map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(|e| ApiError::Transport(format!("HTTP {}: {}", resp.status(), js_error_text(&e))))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Generic request helper: one JSON round trip, logged on failure
pub async fn request<T, B>(method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let body = body
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| ApiError::Transport(format!("Serialization error: {}", e)))?;

    let result = fetch_json(method, path, body).await;
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("[API] {} {} failed: {}", method.as_str(), api_url(path), e).into());
    }
    result
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::Get, path, None).await
}

/// Mutating call answered by `{success, message?}`; `success: false`
/// becomes `ApiError::Rejected`.
pub async fn send<B: Serialize + ?Sized>(method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
    request::<ApiResponse, B>(method, path, body).await?.into_result()
}
