//! Foods Service Bindings
//!
//! Thin `fetch` wrappers over the REST endpoint, organized by resource.

mod foods;

use leptos::prelude::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use food_form::ApiError;

// Re-export all public items
pub use foods::*;

fn network_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

fn decode_error(e: JsValue) -> ApiError {
    ApiError::Decode(format!("{:?}", e))
}

/// Issue a request and fail on any non-2xx status
///
/// A body is always sent as JSON.
async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = json_body {
        let headers = Headers::new().map_err(network_error)?;
        headers.set("Content-Type", "application/json").map_err(network_error)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    let value = JsFuture::from(window().fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response: Response = value.dyn_into().map_err(network_error)?;

    log::debug!("[API] {} {} -> {}", method, url, response.status());
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Read a response body as JSON into `T`
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(decode_error)?;
    let value = JsFuture::from(promise).await.map_err(decode_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
