//! Order contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_core::types::{OrderStatus, Platform};

/// One line of a marketplace order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub quantity: u32,
    pub price: f64,
}

/// Payload of `order:created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedData {
    pub id: String,
    pub user_id: String,
    pub platform: Platform,
    pub platform_order_id: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
    pub currency: String,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}

/// Payload of `order:updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdatedData {
    pub id: String,
    pub user_id: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_tracking_number: Option<String>,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}

/// Result of matching one order line to a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductMatch {
    pub order_line_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub matched: bool,
}

/// Payload of `order-product:updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductUpdatedData {
    pub order_id: String,
    pub user_id: String,
    pub products: Vec<OrderProductMatch>,
    pub timestamp: DateTime<Utc>,
}

/// Payload of `order:update-cargo-label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderCargoLabelData {
    pub order_id: String,
    pub user_id: String,
    pub platform: Platform,
    /// Carrier code or id as reported by the marketplace.
    pub carrier_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,
    /// Request the marketplace's shared label instead of the carrier flow.
    pub use_platform_label: bool,
    pub timestamp: DateTime<Utc>,
}
