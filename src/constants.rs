/// Default backend origin used when `STOREFRONT_API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Default public origin of the storefront, used to build checkout links
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = concat!("storefront-client/", env!("CARGO_PKG_VERSION"));
/// Message surfaced when a failed response carries no usable message
pub const DEFAULT_ERROR_MESSAGE: &str = "request failed";
/// Bounded wait applied to the login call, in seconds
pub const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 5;
/// Default delay between two order status polls, in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
/// Default number of order status polls before giving up
pub const DEFAULT_POLL_ATTEMPTS: u32 = 60;
/// Multipart field name the upload endpoint expects for product images
pub const IMAGE_FIELD_NAME: &str = "imagem";
/// Image shown for products that have none
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200.png?text=Produto";
/// Label used when an order references no product
pub const UNKNOWN_PRODUCT_LABEL: &str = "Indefinido";
/// Number of orders shown in the dashboard "recent orders" block
pub const RECENT_ORDERS_COUNT: usize = 3;
