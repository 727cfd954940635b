//! Sync request contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_core::types::Platform;

use super::entity_version::EntityType;

/// Payload of `sync:requested`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequestedData {
    pub user_id: String,
    pub platform: Platform,
    pub entity_type: EntityType,
    /// Restrict the sync to these entities; absent means everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_ids: Option<Vec<String>>,
    /// Ignore content hashes and resend every record.
    #[serde(default)]
    pub full_sync: bool,
    /// Actual user who triggered the sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
    pub timestamp: DateTime<Utc>,
}
