//! Lifecycle statuses shared across services.

use serde::{Deserialize, Serialize};

/// Order lifecycle as reported by the marketplaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Picking,
    Invoiced,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    UnDelivered,
}

impl OrderStatus {
    /// Whether no further transitions are expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Returned)
    }
}

/// Shipment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Pending,
    LabelCreated,
    InTransit,
    Delivered,
    Failed,
    Cancelled,
}

/// Outcome of a platform synchronisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Excel import/export job lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExcelJobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    Expired,
}

/// Direction of an excel job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcelOperation {
    Import,
    Export,
}

impl ExcelOperation {
    /// Lowercase segment used in storage paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
    ExcelReady,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::UnDelivered).unwrap(),
            "\"UN_DELIVERED\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_excel_operation_str() {
        assert_eq!(ExcelOperation::Export.as_str(), "export");
        assert_eq!(
            serde_json::to_string(&ExcelOperation::Import).unwrap(),
            "\"import\""
        );
    }
}
