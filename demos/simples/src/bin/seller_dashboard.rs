use std::sync::Arc;
use storefront_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Using API at {}", config.rest_api.base_url);

    let client = Arc::new(HttpClient::from_config(&config)?);
    let auth = AuthServiceImpl::new(client.clone(), &config);

    if !auth.is_authenticated() {
        let email = std::env::var("STOREFRONT_SELLER_EMAIL")?;
        let password = std::env::var("STOREFRONT_SELLER_PASSWORD")?;
        auth.login(&email, &password).await?;
        info!("✓ Logged in as {email}");
    }

    let products = ProductServiceImpl::new(client.clone());
    for product in products.list_products().await? {
        info!(
            "{} {} -> {}",
            product.name,
            format_price(product.price),
            checkout_link(&config.public_url, &product.uuid)
        );
    }

    let orders = OrderServiceImpl::new(client);
    let dashboard = orders.dashboard().await?;

    summary_table(&dashboard).printstd();
    orders_table(&recent_orders(&dashboard, RECENT_ORDERS_COUNT)).printstd();

    info!("Dashboard: {}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
