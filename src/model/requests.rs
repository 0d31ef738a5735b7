/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::{require_email, require_non_empty, require_price};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Seller login payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Seller e-mail
    pub email: String,
    /// Seller password
    #[serde(rename = "senha")]
    pub password: String,
}

impl LoginRequest {
    /// Creates a login payload
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the payload before it is sent
    pub fn validate(&self) -> Result<(), AppError> {
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Seller registration payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    /// Seller display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Seller e-mail
    pub email: String,
    /// Seller password
    #[serde(rename = "senha")]
    pub password: String,
}

impl RegisterRequest {
    /// Creates a registration payload
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the payload against the confirmation typed by the seller
    pub fn validate(&self, confirmation: &str) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)?;
        if self.password != confirmation {
            return Err(AppError::InvalidInput("passwords do not match".to_string()));
        }
        Ok(())
    }
}

/// Password recovery payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    /// Address the recovery link is sent to
    pub email: String,
}

/// Password reset payload, built from the recovery link parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordRequest {
    /// Reset token carried by the recovery link
    pub token: String,
    /// Account e-mail carried by the recovery link
    pub email: String,
    /// New password
    #[serde(rename = "novaSenha")]
    pub new_password: String,
}

impl ResetPasswordRequest {
    /// Checks the payload before it is sent
    ///
    /// A recovery link missing its token or e-mail is rejected here.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "reset link is invalid or incomplete".to_string(),
            ));
        }
        require_non_empty("new password", &self.new_password)
    }
}

/// Product create/update payload
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductRequest {
    /// Product name
    #[serde(rename = "nome")]
    pub name: String,
    /// Product description
    #[serde(rename = "descricao")]
    pub description: String,
    /// Unit price
    #[serde(rename = "preco")]
    pub price: f64,
    /// Image URL, usually the one returned by the upload endpoint
    #[serde(rename = "imagem")]
    pub image: String,
}

impl ProductRequest {
    /// Creates a payload with a name and price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Parses the price as typed in a form field (`"19.90"` or `"19,90"`)
    pub fn parse_price(raw: &str) -> Result<f64, AppError> {
        let normalized = raw.trim().replace(',', ".");
        let price = normalized
            .parse::<f64>()
            .map_err(|_| AppError::InvalidInput(format!("price is not a number: {raw}")))?;
        require_price(price)?;
        Ok(price)
    }

    /// Checks the payload before it is sent
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_price(self.price)
    }
}

/// Order placed by a customer from the buy page, or by the seller manually
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateOrderRequest {
    /// Backend id of the product being bought
    #[serde(rename = "produtoId")]
    pub product_id: String,
    /// Customer name
    #[serde(rename = "nomeCliente")]
    pub customer_name: String,
    /// Customer e-mail
    #[serde(rename = "emailCliente")]
    pub customer_email: String,
    /// Customer tax document (CPF/CNPJ)
    #[serde(rename = "documento")]
    pub document: String,
    /// Customer phone number
    #[serde(rename = "telefone")]
    pub phone: String,
}

impl CreateOrderRequest {
    /// Creates an order for a product with the customer's name and e-mail
    pub fn new(
        product_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            ..Default::default()
        }
    }

    /// Set the customer document
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    /// Set the customer phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Checks the payload before it is sent
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("product id", &self.product_id)?;
        require_non_empty("customer name", &self.customer_name)?;
        require_email("customer email", &self.customer_email)
    }
}
