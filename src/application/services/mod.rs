/// Module containing the seller authentication service
pub mod auth_service;
/// Module containing the order service for placing and following orders
pub mod order_service;
/// Module containing the product catalogue service
pub mod product_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::order::*;
pub use crate::application::interfaces::product::*;
pub use auth_service::*;
pub use order_service::*;
pub use product_service::*;
