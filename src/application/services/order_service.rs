use crate::application::client::HttpClient;
use crate::application::services::OrderService;
use crate::error::AppError;
use crate::model::requests::CreateOrderRequest;
use crate::model::responses::{CreateOrderResponse, Dashboard, Order};
use crate::model::utils::{encode_path_segment, require_non_empty};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Implementation of the order service
pub struct OrderServiceImpl {
    client: Arc<HttpClient>,
}

impl OrderServiceImpl {
    /// Creates a new instance of the order service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order, AppError> {
        order.validate()?;
        info!(
            "Creating order for product {} ({})",
            order.product_id, order.customer_email
        );

        let response: CreateOrderResponse = self.client.post("/api/orders", order).await?;
        let created = response.order;

        let has_link = created
            .payment_link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty());
        if created.uuid.is_empty() || !has_link {
            error!("Order created without uuid or payment link: {}", created);
            return Err(AppError::InvalidResponse(
                "order is missing its uuid or payment link".to_string(),
            ));
        }

        info!("✓ Order {} created", created.uuid);
        Ok(created)
    }

    async fn get_order(&self, uuid: &str) -> Result<Order, AppError> {
        require_non_empty("uuid", uuid)?;
        let path = format!("/api/orders/{}", encode_path_segment(uuid));
        let order: Order = self.client.get(&path).await?;
        debug!("Order {} status: {:?}", uuid, order.payment_status);
        Ok(order)
    }

    async fn dashboard(&self) -> Result<Dashboard, AppError> {
        if !self.client.token_store().has_token() {
            warn!("Dashboard requested without a session token");
            return Err(AppError::Unauthorized);
        }

        info!("Getting dashboard");
        let dashboard: Dashboard = self.client.get("/api/orders/dashboard").await?;
        debug!(
            "Dashboard obtained: {} orders, total sales {:.2}",
            dashboard.total_orders, dashboard.total_sales
        );
        Ok(dashboard)
    }

    async fn wait_for_payment(
        &self,
        uuid: &str,
        interval: Duration,
        max_attempts: u32,
    ) -> Result<Order, AppError> {
        if max_attempts == 0 {
            return Err(AppError::InvalidInput(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        let mut attempt = 1;
        loop {
            let order = self.get_order(uuid).await?;
            if order.is_paid() {
                info!("Order {} paid after {} poll(s)", uuid, attempt);
                return Ok(order);
            }
            if attempt >= max_attempts {
                warn!(
                    "Order {} still pending after {} poll(s)",
                    uuid, max_attempts
                );
                return Ok(order);
            }
            debug!(
                "Order {} pending (poll {}/{}), waiting {}ms",
                uuid,
                attempt,
                max_attempts,
                interval.as_millis()
            );
            attempt += 1;
            tokio::time::sleep(interval).await;
        }
    }
}
