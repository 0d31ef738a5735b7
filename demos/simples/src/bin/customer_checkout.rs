use std::sync::Arc;
use storefront_client::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let (Some(product_uuid), Some(name), Some(email)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: customer_checkout <product-uuid> <name> <email>");
        std::process::exit(2);
    };

    let config = Config::new();
    let client = Arc::new(HttpClient::new(
        &config.rest_api.base_url,
        Arc::new(MemoryTokenStore::new()),
    )?);

    let product = ProductServiceImpl::new(client.clone())
        .get_product_by_uuid(&product_uuid)
        .await?;
    info!("Buying {} for {}", product.name, format_price(product.price));

    let orders = OrderServiceImpl::new(client);
    let order = orders
        .create_order(&CreateOrderRequest::new(&product.id, name, email))
        .await?;

    if let Some(link) = &order.payment_link {
        info!("Pay here: {link}");
    }
    info!(
        "Follow the order at {}",
        order_status_link(&config.public_url, &order.uuid)
    );

    let order = orders
        .wait_for_payment(&order.uuid, config.poll_interval(), config.polling.max_attempts)
        .await?;
    if order.is_paid() {
        info!("✓ Payment confirmed");
    } else {
        warn!("Payment still pending after {} polls", config.polling.max_attempts);
    }
    Ok(())
}
