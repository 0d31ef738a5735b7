/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` the same as a missing field
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Token issued by login and registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Session token to send as bearer credential
    pub token: String,
}

/// Generic acknowledgement body (`{"message": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MessageResponse {
    /// Human readable message, when the backend sends one
    #[serde(default, alias = "mensagem")]
    pub message: Option<String>,
}

/// Product as stored by the backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    /// Backend id
    #[serde(rename = "_id", default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Public identifier used in checkout links
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub uuid: String,
    /// Product name
    #[serde(rename = "nome", default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Product description
    #[serde(rename = "descricao", default, deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// Unit price
    #[serde(rename = "preco", default, deserialize_with = "deserialize_null_as_default")]
    pub price: f64,
    /// Image URL, absolute or relative to the backend origin
    #[serde(rename = "imagem", default, deserialize_with = "deserialize_null_as_default")]
    pub image: String,
}

/// Result of an image upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// URL of the stored image
    pub url: String,
}

/// Product reference inside an order
///
/// Listing endpoints populate the product; others only send its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductRef {
    /// Populated product document
    Populated(Product),
    /// Bare product id
    Id(String),
}

impl ProductRef {
    /// The populated product, if any
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductRef::Populated(product) => Some(product),
            ProductRef::Id(_) => None,
        }
    }

    /// Backend id of the referenced product
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated(product) => &product.id,
            ProductRef::Id(id) => id,
        }
    }
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    /// Payment confirmed
    #[serde(rename = "pago")]
    Paid,
    /// Anything the backend has not confirmed yet
    #[default]
    #[serde(rename = "pendente", other)]
    Pending,
}

impl PaymentStatus {
    /// Whether the payment is confirmed
    #[must_use]
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

/// Order as returned by the backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Order {
    /// Backend id
    #[serde(rename = "_id", default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Public identifier used in order status links
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub uuid: String,
    /// Ordered product
    #[serde(rename = "produto", default)]
    pub product: Option<ProductRef>,
    /// Customer name
    #[serde(rename = "nomeCliente", default, deserialize_with = "deserialize_null_as_default")]
    pub customer_name: String,
    /// Customer e-mail
    #[serde(rename = "emailCliente", default, deserialize_with = "deserialize_null_as_default")]
    pub customer_email: String,
    /// Customer tax document
    #[serde(rename = "documento", default, deserialize_with = "deserialize_null_as_default")]
    pub document: String,
    /// Customer phone number
    #[serde(rename = "telefone", default, deserialize_with = "deserialize_null_as_default")]
    pub phone: String,
    /// Payment state
    #[serde(rename = "statusPagamento", default, deserialize_with = "deserialize_null_as_default")]
    pub payment_status: PaymentStatus,
    /// Link the customer pays through
    #[serde(rename = "linkPagamento", default)]
    pub payment_link: Option<String>,
    /// Creation time
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Populated product of this order, if the backend sent it
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref().and_then(ProductRef::product)
    }

    /// Whether the payment is confirmed
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.payment_status.is_paid()
    }
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderResponse {
    /// Created order, including its payment link
    #[serde(rename = "pedido")]
    pub order: Order,
}

/// Seller dashboard summary
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dashboard {
    /// Total amount sold
    #[serde(rename = "totalVendas", default, deserialize_with = "deserialize_null_as_default")]
    pub total_sales: f64,
    /// Number of orders
    #[serde(rename = "totalPedidos", default, deserialize_with = "deserialize_null_as_default")]
    pub total_orders: u64,
    /// Number of products
    #[serde(rename = "produtos", default, deserialize_with = "deserialize_null_as_default")]
    pub products: u64,
    /// Number of distinct customers
    #[serde(rename = "clientes", default, deserialize_with = "deserialize_null_as_default")]
    pub customers: u64,
    /// Orders, most recent first
    #[serde(rename = "pedidos", default, deserialize_with = "deserialize_null_as_default")]
    pub orders: Vec<Order>,
}
