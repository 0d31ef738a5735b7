/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::session::TokenStore;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Body, make_http_request, parse_response};
use reqwest::Client as HttpInternalClient;
use reqwest::Method;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// HTTP client for the storefront backend
///
/// Every call:
/// - reads the session token from the [`TokenStore`] and, when present,
///   sends it as `Authorization: Bearer <token>`
/// - sends JSON bodies with `Content-Type: application/json` and leaves
///   multipart bodies to the transport
/// - lets caller headers replace its own
/// - turns non-2xx answers into [`AppError::Api`] carrying the backend's
///   message
///
/// Calls are independent; there is no retry, no rate limiting and no
/// timeout. Wrap a call in [`crate::utils::with_timeout`] for a bounded wait.
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl HttpClient {
    /// Creates a client for `base_url` reading tokens from `token_store`
    ///
    /// # Arguments
    /// * `base_url` - Backend origin, e.g. `http://localhost:5000`
    /// * `token_store` - Where the session token is read from on every call
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to use client
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(base_url: &str, token_store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_store,
        })
    }

    /// Creates a client from configuration, with the token store it describes
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.rest_api.base_url, config.token_store())
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(ApiRequest::get(path)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::post(path).json(body)?).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::put(path).json(body)?).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Makes a POST request with a multipart form (file uploads)
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, AppError> {
        self.execute(ApiRequest::post(path).body(form)).await
    }

    /// Makes a request with an arbitrary method and body
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<T, AppError> {
        self.execute(ApiRequest::new(method, path).body(body)).await
    }

    /// Sends a fully described request and decodes the answer
    ///
    /// This is the only place the token store is read.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let token = self.token_store.token();
        debug!(
            "Dispatching {} {} (authenticated: {})",
            request.method,
            request.path,
            token.is_some()
        );
        let response =
            make_http_request(&self.http_client, &self.base_url, token.as_deref(), request)
                .await?;
        parse_response(response).await
    }

    /// Backend origin requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store shared with this client
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.token_store.clone()
    }
}
