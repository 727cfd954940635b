//! Shipment contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_core::types::ShipmentStatus;

/// Payload of `shipment:created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCreatedData {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub carrier_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub status: ShipmentStatus,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}

/// Payload of `shipment:updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdatedData {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub status: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}
