//! # storefront-client
//!
//! Async client for the Checkout Tech storefront backend.
//!
//! Sellers authenticate, manage products and generate shareable checkout
//! links; customers fetch a product through its public link, place an order
//! and follow its payment status. All business logic lives in the backend:
//! this crate builds requests, attaches the session token, and turns
//! responses into typed values or a single [`error::AppError`].
//!
//! ## Quick start
//!
//! ```ignore
//! use storefront_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(HttpClient::from_config(&config)?);
//! let auth = AuthServiceImpl::new(client.clone(), &config);
//! auth.login("seller@example.com", "secret").await?;
//!
//! let products = ProductServiceImpl::new(client.clone());
//! for product in products.list_products().await? {
//!     println!("{}", checkout_link(&config.public_url, &product.uuid));
//! }
//! ```
//!
//! ## Layout
//!
//! - [`application`]: the HTTP client wrapper, token stores, configuration
//!   and the auth/product/order services.
//! - [`model`]: request and response payloads plus the low-level request
//!   dispatch.
//! - [`presentation`]: dashboard rows, link helpers and terminal tables.
//! - [`utils`]: environment and logging helpers.

/// Application layer: client, session storage, configuration and services
pub mod application;
/// Crate wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and HTTP dispatch
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Display helpers for orders, products and the dashboard
pub mod presentation;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
