/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use crate::constants::UNKNOWN_PRODUCT_LABEL;
use crate::model::responses::{Dashboard, Order, PaymentStatus};
use crate::presentation::product::format_price;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};

/// Text shown when a table has no orders
pub const EMPTY_ORDERS_LABEL: &str = "Nenhum pedido ainda.";

/// Label shown to sellers for a payment state
pub fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "Pago",
        PaymentStatus::Pending => "Aguardando",
    }
}

/// One line of the seller's order list
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRow {
    /// Row identifier: the order uuid, or `PED00n` in the recent orders block
    pub id: String,
    /// Customer name
    pub customer: String,
    /// Product name, or the unknown product label
    pub product: String,
    /// Order value (product price, 0 when unknown)
    pub value: f64,
    /// Status label
    pub status: String,
    /// Creation time, `dd/mm/YYYY HH:MM` in UTC; empty when unknown
    pub created_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let product = order.product();
        OrderRow {
            id: order.uuid.clone(),
            customer: order.customer_name.clone(),
            product: product
                .map(|p| p.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_PRODUCT_LABEL.to_string()),
            value: product.map(|p| p.price).unwrap_or(0.0),
            status: status_label(order.payment_status).to_string(),
            created_at: order
                .created_at
                .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Rows for every order of the dashboard
pub fn order_rows(dashboard: &Dashboard) -> Vec<OrderRow> {
    dashboard.orders.iter().map(OrderRow::from).collect()
}

/// The first `count` orders of the dashboard, numbered `PED001`, `PED002`...
pub fn recent_orders(dashboard: &Dashboard, count: usize) -> Vec<OrderRow> {
    dashboard
        .orders
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, order)| OrderRow {
            id: format!("PED{:03}", i + 1),
            ..OrderRow::from(order)
        })
        .collect()
}

/// Renders rows as a terminal table
pub fn orders_table(rows: &[OrderRow]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Cliente", "Produto", "Valor", "Status", "Data"]);

    if rows.is_empty() {
        table.add_row(Row::new(vec![Cell::new(EMPTY_ORDERS_LABEL)]));
        return table;
    }

    for r in rows {
        table.add_row(row![
            r.customer,
            r.product,
            format_price(r.value),
            r.status,
            r.created_at
        ]);
    }
    table
}

/// Renders the dashboard counters as a two column table
pub fn summary_table(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Total de vendas", format_price(dashboard.total_sales)]);
    table.add_row(row!["Pedidos", dashboard.total_orders]);
    table.add_row(row!["Produtos", dashboard.products]);
    table.add_row(row!["Clientes", dashboard.customers]);
    table
}
