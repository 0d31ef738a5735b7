/// HTTP client wrapper for the storefront backend
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
/// Session token storage
pub mod session;
