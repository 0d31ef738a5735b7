use crate::application::client::HttpClient;
use crate::application::services::ProductService;
use crate::constants::IMAGE_FIELD_NAME;
use crate::error::AppError;
use crate::model::requests::ProductRequest;
use crate::model::responses::{MessageResponse, Product, UploadResponse};
use crate::model::utils::{encode_path_segment, require_non_empty};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the product service
pub struct ProductServiceImpl {
    client: Arc<HttpClient>,
}

impl ProductServiceImpl {
    /// Creates a new instance of the product service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

/// Reads a product out of a create/update answer
///
/// Some routes answer with the product itself, others wrap it as
/// `{"produto": {...}}` next to a message.
pub fn product_from_value(value: Value) -> Result<Product, AppError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key("produto") => map
            .remove("produto")
            .unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| AppError::Deserialization(e.to_string()))
}

fn guess_mime(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        info!("Getting products");
        let products: Vec<Product> = self.client.get("/api/products").await?;
        debug!("Products obtained: {}", products.len());
        Ok(products)
    }

    async fn get_product_by_uuid(&self, uuid: &str) -> Result<Product, AppError> {
        require_non_empty("uuid", uuid)?;
        let path = format!("/api/products/uuid/{}", encode_path_segment(uuid));
        debug!("Getting product {}", uuid);
        self.client.get(&path).await
    }

    async fn create_product(&self, product: &ProductRequest) -> Result<Product, AppError> {
        product.validate()?;
        info!("Creating product {}", product.name);
        let value: Value = self.client.post("/api/products", product).await?;
        product_from_value(value)
    }

    async fn update_product(
        &self,
        id: &str,
        product: &ProductRequest,
    ) -> Result<Product, AppError> {
        require_non_empty("id", id)?;
        product.validate()?;
        let path = format!("/api/products/{}", encode_path_segment(id));
        info!("Updating product {}", id);
        let value: Value = self.client.put(&path, product).await?;
        product_from_value(value)
    }

    async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        require_non_empty("id", id)?;
        let path = format!("/api/products/{}", encode_path_segment(id));
        info!("Deleting product {}", id);
        let response: MessageResponse = self.client.delete(&path).await?;
        debug!(
            "Product {} deleted: {}",
            id,
            response.message.as_deref().unwrap_or("no message")
        );
        Ok(())
    }

    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        require_non_empty("file name", file_name)?;
        if bytes.is_empty() {
            return Err(AppError::InvalidInput("image is empty".to_string()));
        }
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(guess_mime(file_name))?;
        let form = Form::new().part(IMAGE_FIELD_NAME, part);

        let response: UploadResponse = self.client.upload("/api/products/upload", form).await?;
        info!("Image uploaded to {}", response.url);
        Ok(response.url)
    }
}
