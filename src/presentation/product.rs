use crate::constants::PLACEHOLDER_IMAGE_URL;

/// Public link a seller shares so customers can buy `uuid`
pub fn checkout_link(public_url: &str, uuid: &str) -> String {
    format!("{}/buy/{}", public_url.trim_end_matches('/'), uuid)
}

/// Public link where both parties follow the payment of order `uuid`
pub fn order_status_link(public_url: &str, uuid: &str) -> String {
    format!("{}/order/{}", public_url.trim_end_matches('/'), uuid)
}

/// Resolves a product image to something displayable
///
/// Empty images get a placeholder, absolute URLs are kept, and paths served
/// by the backend (`/uploads/...`) are prefixed with its origin.
pub fn image_url(api_origin: &str, image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        return PLACEHOLDER_IMAGE_URL.to_string();
    }
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }
    format!(
        "{}/{}",
        api_origin.trim_end_matches('/'),
        image.trim_start_matches('/')
    )
}

/// Formats an amount in reais, `R$ 1234.50`
pub fn format_price(value: f64) -> String {
    format!("R$ {value:.2}")
}
