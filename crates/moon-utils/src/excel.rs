//! Excel import/export storage layout.
//!
//! Files live under `excel/{service}/{user_id}/{operation}/` and are named
//! `{service}_{operation}_{user_id}_{YYYYMMDDHHMMSS}.xlsx`.

use chrono::{DateTime, Utc};

use moon_core::types::ExcelOperation;

/// Root prefix of every excel object.
const PREFIX: &str = "excel";

/// File extension of generated workbooks.
const EXTENSION: &str = "xlsx";

/// Lower-cases `service` and replaces anything but ASCII letters and digits
/// with `-`.
fn normalize_service(service: &str) -> String {
    service
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Directory holding a user's files for one service and operation.
pub fn excel_storage_dir(service: &str, user_id: &str, operation: ExcelOperation) -> String {
    format!(
        "{PREFIX}/{}/{user_id}/{}",
        normalize_service(service),
        operation.as_str()
    )
}

/// File name of a workbook produced at `at`.
pub fn excel_file_name(
    service: &str,
    operation: ExcelOperation,
    user_id: &str,
    at: DateTime<Utc>,
) -> String {
    format!(
        "{}_{}_{user_id}_{}.{EXTENSION}",
        normalize_service(service),
        operation.as_str(),
        at.format("%Y%m%d%H%M%S")
    )
}

/// Full object key: directory and file name.
pub fn excel_object_key(
    service: &str,
    user_id: &str,
    operation: ExcelOperation,
    at: DateTime<Utc>,
) -> String {
    format!(
        "{}/{}",
        excel_storage_dir(service, user_id, operation),
        excel_file_name(service, operation, user_id, at)
    )
}
