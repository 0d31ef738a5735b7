//! # Storefront Client Prelude
//!
//! Brings the commonly used types and traits into scope in one line.
//!
//! ## Usage
//!
//! ```rust
//! use storefront_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:5000");
//! let client = HttpClient::from_config(&config).unwrap();
//! assert!(!client.token_store().has_token());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the storefront client
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// HTTP CLIENT AND SESSION
// ============================================================================

/// HTTP client wrapper
pub use crate::application::client::HttpClient;

/// Request descriptor and body variants
pub use crate::model::http::{ApiRequest, Body};

/// Session token stores
pub use crate::application::session::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{AuthService, OrderService, ProductService};

/// Service implementations
pub use crate::application::services::{AuthServiceImpl, OrderServiceImpl, ProductServiceImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::model::requests::{
    CreateOrderRequest, ForgotPasswordRequest, LoginRequest, ProductRequest, RegisterRequest,
    ResetPasswordRequest,
};

/// Response payloads
pub use crate::model::responses::{
    AuthResponse, CreateOrderResponse, Dashboard, MessageResponse, Order, PaymentStatus, Product,
    ProductRef, UploadResponse,
};

// ============================================================================
// PRESENTATION
// ============================================================================

/// Display helpers
pub use crate::presentation::{
    OrderRow, checkout_link, format_price, image_url, order_rows, order_status_link,
    orders_table, recent_orders, status_label, summary_table,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging and bounded-wait helpers
pub use crate::utils::{setup_logger, with_timeout};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use reqwest::multipart::{Form, Part};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
