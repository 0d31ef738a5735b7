/// Seller authentication interface
pub mod auth;
/// Order interface
pub mod order;
/// Product catalogue interface
pub mod product;
