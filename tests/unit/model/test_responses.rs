use chrono::{TimeZone, Utc};
use storefront_client::model::responses::{
    CreateOrderResponse, Dashboard, MessageResponse, Order, PaymentStatus, Product, ProductRef,
};

#[test]
fn test_product_deserialization() {
    let json = r#"{
        "_id": "64f1",
        "uuid": "a1b2",
        "nome": "Widget",
        "descricao": "Blue widget",
        "preco": 19.9,
        "imagem": "/uploads/w.png",
        "__v": 0
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id, "64f1");
    assert_eq!(product.uuid, "a1b2");
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 19.9);
}

#[test]
fn test_product_missing_fields_default() {
    let product: Product = serde_json::from_str(r#"{"nome": "Only name"}"#).unwrap();
    assert_eq!(product.id, "");
    assert_eq!(product.price, 0.0);
}

#[test]
fn test_payment_status_values() {
    let paid: PaymentStatus = serde_json::from_str(r#""pago""#).unwrap();
    let pending: PaymentStatus = serde_json::from_str(r#""pendente""#).unwrap();
    let other: PaymentStatus = serde_json::from_str(r#""expirado""#).unwrap();
    assert_eq!(paid, PaymentStatus::Paid);
    assert_eq!(pending, PaymentStatus::Pending);
    assert_eq!(other, PaymentStatus::Pending);
    assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), r#""pago""#);
}

#[test]
fn test_order_with_populated_product() {
    let json = r#"{
        "uuid": "o-1",
        "produto": {"_id": "p1", "nome": "Widget", "preco": 10},
        "nomeCliente": "Maria",
        "statusPagamento": "pago",
        "createdAt": "2025-10-20T14:30:00.000Z"
    }"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert!(order.is_paid());
    assert_eq!(order.product().map(|p| p.price), Some(10.0));
    assert_eq!(
        order.created_at,
        Some(Utc.with_ymd_and_hms(2025, 10, 20, 14, 30, 0).unwrap())
    );
}

#[test]
fn test_order_with_product_id_only() {
    let json = r#"{"uuid": "o-2", "produto": "p1", "statusPagamento": "pendente"}"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert!(order.product().is_none());
    assert_eq!(order.product.as_ref().map(ProductRef::id), Some("p1"));
    assert!(!order.is_paid());
}

#[test]
fn test_create_order_response() {
    let json = r#"{"pedido": {"uuid": "o-3", "linkPagamento": "https://pay/x"}}"#;
    let response: CreateOrderResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.order.uuid, "o-3");
    assert_eq!(response.order.payment_link.as_deref(), Some("https://pay/x"));
    assert_eq!(response.order.payment_status, PaymentStatus::Pending);
}

#[test]
fn test_dashboard_deserialization() {
    let json = r#"{"totalVendas": 99.5, "totalPedidos": 3, "produtos": 2, "clientes": 3, "pedidos": []}"#;
    let dashboard: Dashboard = serde_json::from_str(json).unwrap();
    assert_eq!(dashboard.total_sales, 99.5);
    assert_eq!(dashboard.total_orders, 3);
    assert_eq!(dashboard.customers, 3);
    assert!(dashboard.orders.is_empty());
}

#[test]
fn test_message_response_accepts_legacy_key() {
    let response: MessageResponse = serde_json::from_str(r#"{"mensagem": "ok"}"#).unwrap();
    assert_eq!(response.message.as_deref(), Some("ok"));
    let empty: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.message, None);
}

#[test]
fn test_order_null_status_reads_as_pending() {
    let json = r#"{"uuid": "o-4", "statusPagamento": null, "nomeCliente": null}"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.customer_name, "");
}

#[test]
fn test_dashboard_tolerates_null_fields_in_orders() {
    let json = r#"{
        "totalVendas": null,
        "totalPedidos": 2,
        "pedidos": [
            {"uuid": "u-1", "statusPagamento": null},
            {"uuid": "u-2", "statusPagamento": "pago", "produto": {"_id": "p1", "nome": "Widget", "preco": null}}
        ]
    }"#;
    let dashboard: Dashboard = serde_json::from_str(json).unwrap();
    assert_eq!(dashboard.total_sales, 0.0);
    assert_eq!(dashboard.orders.len(), 2);
    assert!(!dashboard.orders[0].is_paid());
    assert!(dashboard.orders[1].is_paid());
    let product = dashboard.orders[1].product().unwrap();
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 0.0);
}
