//! Invoice contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of `invoice:created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreatedData {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub invoice_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
    pub total_amount: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
}
