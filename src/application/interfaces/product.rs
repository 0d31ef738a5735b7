use crate::error::AppError;
use crate::model::requests::ProductRequest;
use crate::model::responses::Product;
use async_trait::async_trait;

/// Interface for the product catalogue
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists the seller's products
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    /// Gets a product through its public uuid (buy page, no session needed)
    async fn get_product_by_uuid(&self, uuid: &str) -> Result<Product, AppError>;

    /// Creates a product
    async fn create_product(&self, product: &ProductRequest) -> Result<Product, AppError>;

    /// Replaces the fields of an existing product
    async fn update_product(&self, id: &str, product: &ProductRequest)
    -> Result<Product, AppError>;

    /// Deletes a product
    async fn delete_product(&self, id: &str) -> Result<(), AppError>;

    /// Uploads a product image
    ///
    /// # Arguments
    /// * `file_name` - Name reported for the file part
    /// * `bytes` - Raw image content
    ///
    /// # Returns
    /// * URL of the stored image, ready for [`ProductRequest::with_image`]
    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}
