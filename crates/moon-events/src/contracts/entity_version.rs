//! Bulk entity-version contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity kinds whose versions are tracked across services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Product,
    Order,
    Brand,
    Category,
    Customer,
    Shipment,
    Invoice,
}

/// New version of a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityVersion {
    pub id: String,
    pub version: i64,
}

/// Payload of `entity-version:bulk-updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityVersionBulkUpdatedData {
    pub user_id: String,
    pub entity_type: EntityType,
    pub entities: Vec<EntityVersion>,
    pub timestamp: DateTime<Utc>,
}
