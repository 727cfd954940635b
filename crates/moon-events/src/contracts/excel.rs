//! Excel file contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moon_core::types::ExcelOperation;

/// Payload of `excel:file-stored`.
///
/// Emitted once the generated or uploaded workbook is in storage; the
/// notification service turns it into a download link for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcelFileStoredData {
    /// Excel job id.
    pub job_id: String,
    /// Job owner.
    pub user_id: String,
    /// Parent account of the owner when the owner is a sub-user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_user_id: Option<String>,
    /// Service that produced the file.
    pub service: String,
    /// Import or export.
    pub operation: ExcelOperation,
    /// File name, without directory.
    pub file_name: String,
    /// Storage object key.
    pub file_path: String,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Data rows written or read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
    /// When the stored file will be removed.
    pub expires_at: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}
