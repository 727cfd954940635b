//! Brand contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_core::types::{Platform, SyncStatus};

/// Payload of `brand:created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCreatedData {
    /// Brand id.
    pub id: String,
    /// Owning (effective) user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Merchant-side brand code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Content hash used for delta sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// Entity version after the change.
    pub version: i64,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

/// Payload of `brand:updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdatedData {
    /// Brand id.
    pub id: String,
    /// Owning (effective) user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Merchant-side brand code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Content hash used for delta sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// Entity version after the change.
    pub version: i64,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

/// One brand as returned by a marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBrand {
    /// Marketplace-side brand id.
    pub platform_brand_id: String,
    /// Marketplace-side name.
    pub name: String,
    /// Matched merchant brand, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Content hash of the marketplace record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

/// Payload of `platform-brand:synced`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBrandSyncedData {
    /// Owning (effective) user id.
    pub user_id: String,
    /// Marketplace that was synchronised.
    pub platform: Platform,
    /// Brands that changed since the previous sync.
    pub brands: Vec<PlatformBrand>,
    /// Sync outcome.
    pub sync_status: SyncStatus,
    /// When the sync finished.
    pub timestamp: DateTime<Utc>,
}
