use assert_json_diff::assert_json_eq;
use serde_json::json;
use storefront_client::error::AppError;
use storefront_client::model::requests::{
    CreateOrderRequest, LoginRequest, ProductRequest, RegisterRequest, ResetPasswordRequest,
};

#[test]
fn test_login_request_uses_backend_field_names() {
    let request = LoginRequest::new("seller@shop.com", "secret");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"email": "seller@shop.com", "senha": "secret"})
    );
    assert!(request.validate().is_ok());
}

#[test]
fn test_login_request_rejects_blank_password() {
    let err = LoginRequest::new("seller@shop.com", "").validate().unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_register_request_validation() {
    let request = RegisterRequest::new("Ana", "ana@shop.com", "pw");
    assert!(request.validate("pw").is_ok());
    assert_eq!(
        request.validate("other").unwrap_err().to_string(),
        "invalid input: passwords do not match"
    );
    assert!(
        RegisterRequest::new("", "ana@shop.com", "pw")
            .validate("pw")
            .is_err()
    );
}

#[test]
fn test_reset_password_request_serialization() {
    let request = ResetPasswordRequest {
        token: "t".to_string(),
        email: "ana@shop.com".to_string(),
        new_password: "np".to_string(),
    };
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"token": "t", "email": "ana@shop.com", "novaSenha": "np"})
    );
}

#[test]
fn test_product_request_serialization() {
    let request = ProductRequest::new("Widget", 10.0)
        .with_description("Blue")
        .with_image("/uploads/w.png");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"nome": "Widget", "descricao": "Blue", "preco": 10.0, "imagem": "/uploads/w.png"})
    );
}

#[test]
fn test_product_request_parse_price() {
    assert_eq!(ProductRequest::parse_price("19.90").unwrap(), 19.9);
    assert_eq!(ProductRequest::parse_price(" 19,90 ").unwrap(), 19.9);
    assert!(ProductRequest::parse_price("abc").is_err());
    assert!(ProductRequest::parse_price("-3").is_err());
}

#[test]
fn test_product_request_validation() {
    assert!(ProductRequest::new("Widget", 0.0).validate().is_ok());
    assert!(ProductRequest::new("  ", 1.0).validate().is_err());
    assert!(ProductRequest::new("Widget", f64::NAN).validate().is_err());
}

#[test]
fn test_create_order_request_serialization() {
    let request = CreateOrderRequest::new("p1", "Maria", "maria@mail.com")
        .with_document("123")
        .with_phone("55");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "produtoId": "p1",
            "nomeCliente": "Maria",
            "emailCliente": "maria@mail.com",
            "documento": "123",
            "telefone": "55"
        })
    );
}

#[test]
fn test_create_order_request_validation() {
    assert!(
        CreateOrderRequest::new("p1", "Maria", "maria@mail.com")
            .validate()
            .is_ok()
    );
    assert!(
        CreateOrderRequest::new("p1", "Maria", "maria.mail.com")
            .validate()
            .is_err()
    );
    assert!(
        CreateOrderRequest::new("", "Maria", "maria@mail.com")
            .validate()
            .is_err()
    );
}
