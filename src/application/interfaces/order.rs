use crate::error::AppError;
use crate::model::requests::CreateOrderRequest;
use crate::model::responses::{Dashboard, Order};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
/// Service for placing orders and following their payment
pub trait OrderService: Send + Sync {
    /// Places an order
    ///
    /// The returned order always has a uuid and a payment link; a backend
    /// answer without them is [`AppError::InvalidResponse`].
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order, AppError>;

    /// Gets an order through its public uuid
    async fn get_order(&self, uuid: &str) -> Result<Order, AppError>;

    /// Gets the seller's dashboard summary
    ///
    /// Requires a stored session token; without one the call fails with
    /// [`AppError::Unauthorized`] and nothing is sent.
    async fn dashboard(&self) -> Result<Dashboard, AppError>;

    /// Polls an order until it is paid
    ///
    /// Polls are strictly sequential, `interval` apart, at most
    /// `max_attempts` of them. Returns the last order fetched, paid or not.
    async fn wait_for_payment(
        &self,
        uuid: &str,
        interval: Duration,
        max_attempts: u32,
    ) -> Result<Order, AppError>;
}
