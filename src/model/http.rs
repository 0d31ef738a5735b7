/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/

//! Low level request dispatch
//!
//! [`make_http_request`] is the single path every call takes: it assembles
//! headers, encodes the body, sends the request and turns non-2xx answers
//! into [`AppError::Api`]. [`parse_response`] decodes 2xx bodies.

use crate::constants::DEFAULT_ERROR_MESSAGE;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// JSON media type sent with structured bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Keys searched, in order, for a human readable message in an error body
///
/// `message` is the contract; the other two are emitted by older backend
/// routes.
pub const ERROR_MESSAGE_KEYS: [&str; 3] = ["message", "mensagem", "erro"];

/// Payload attached to a request
#[derive(Debug, Default)]
pub enum Body {
    /// No body at all
    #[default]
    Empty,
    /// Structured record, sent as JSON text with `Content-Type: application/json`
    Json(Value),
    /// Multipart form; the transport writes the content type and boundary
    Multipart(Form),
}

impl Body {
    /// Serializes any record into a [`Body::Json`]
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, AppError> {
        let value = serde_json::to_value(body).map_err(|e| {
            error!("Failed to serialize request body: {}", e);
            AppError::Json(e)
        })?;
        Ok(Body::Json(value))
    }
}

impl From<Form> for Body {
    fn from(form: Form) -> Self {
        Body::Multipart(form)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

/// Everything needed to issue one call: method, path, payload and extra headers
///
/// Built per call and consumed by [`crate::application::client::HttpClient::execute`].
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, or an absolute `http(s)` URL
    pub path: String,
    /// Request payload
    pub body: Body,
    /// Caller supplied headers, applied after the client's own
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request without body or extra headers
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Body::Empty,
            headers: Vec::new(),
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets the payload
    #[must_use]
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes `body` as the JSON payload
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Body::json(body)?;
        Ok(self)
    }

    /// Adds a header; for a repeated name the last value wins
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Joins a path onto the base URL
///
/// Absolute `http://` / `https://` paths are returned unchanged.
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Builds the header map for one call
///
/// Order matters: the bearer token first, then the JSON content type (only
/// for [`Body::Json`]), then the caller's headers, each replacing any value
/// already present under the same name.
pub fn build_headers(
    token: Option<&str>,
    body: &Body,
    extra: &[(String, String)],
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::InvalidHeader(format!("authorization: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    if let Body::Json(_) = body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Pulls a message out of an error response body
///
/// Returns `None` when the body is not JSON, not an object, or has no
/// non-empty string under any of [`ERROR_MESSAGE_KEYS`].
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    ERROR_MESSAGE_KEYS
        .iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

/// Sends one request and returns the raw 2xx response
///
/// Non-2xx statuses become [`AppError::Api`] with the extracted message, or
/// [`DEFAULT_ERROR_MESSAGE`]. Transport failures become [`AppError::Network`].
/// Failures are logged before being returned; nothing is retried.
///
/// # Example
///
/// ```ignore
/// use storefront_client::model::http::{make_http_request, ApiRequest};
///
/// let client = reqwest::Client::new();
/// let request = ApiRequest::post("/api/auth/login").json(&credentials)?;
/// let response = make_http_request(
///     &client,
///     "http://localhost:5000",
///     None,
///     request,
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    request: ApiRequest,
) -> Result<Response, AppError> {
    let ApiRequest {
        method,
        path,
        body,
        headers,
    } = request;

    let url = build_url(base_url, &path);
    let header_map = build_headers(token, &body, &headers)
        .inspect_err(|e| error!("{} {} rejected before sending: {}", method, url, e))?;

    debug!("{} {}", method, url);

    let mut builder = client.request(method.clone(), &url);
    builder = match body {
        Body::Empty => builder,
        Body::Json(value) => builder.body(serde_json::to_vec(&value).map_err(|e| {
            error!("Failed to encode body for {} {}: {}", method, url, e);
            AppError::Json(e)
        })?),
        Body::Multipart(form) => builder.multipart(form),
    };
    // applied last so that caller values replace anything set above
    builder = builder.headers(header_map);

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("{} {} failed: {}", method, url, e);
            return Err(AppError::Network(e));
        }
    };

    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    let message =
        extract_error_message(&body_text).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    error!("Request failed with status {}: {}", status, message);
    Err(AppError::api(status, message))
}

/// Decodes a 2xx response body into `T`
///
/// A body that does not decode is an [`AppError::Deserialization`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let url = response.url().to_string();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read response body from {}: {}", url, e);
            return Err(AppError::Network(e));
        }
    };
    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Malformed response body from {}: {}", url, e);
        AppError::Deserialization(e.to_string())
    })
}
