//! Permissions grantable to sub-users.

use serde::{Deserialize, Serialize};

/// A single capability a parent account can delegate to a sub-user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ViewProducts,
    ManageProducts,
    ViewOrders,
    ManageOrders,
    ManageInventory,
    ManageShipments,
    ManageInvoices,
    ImportExcel,
    ExportExcel,
    ManageIntegrations,
    ManageSubUsers,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 11] = [
        Self::ViewProducts,
        Self::ManageProducts,
        Self::ViewOrders,
        Self::ManageOrders,
        Self::ManageInventory,
        Self::ManageShipments,
        Self::ManageInvoices,
        Self::ImportExcel,
        Self::ExportExcel,
        Self::ManageIntegrations,
        Self::ManageSubUsers,
    ];

    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewProducts => "VIEW_PRODUCTS",
            Self::ManageProducts => "MANAGE_PRODUCTS",
            Self::ViewOrders => "VIEW_ORDERS",
            Self::ManageOrders => "MANAGE_ORDERS",
            Self::ManageInventory => "MANAGE_INVENTORY",
            Self::ManageShipments => "MANAGE_SHIPMENTS",
            Self::ManageInvoices => "MANAGE_INVOICES",
            Self::ImportExcel => "IMPORT_EXCEL",
            Self::ExportExcel => "EXPORT_EXCEL",
            Self::ManageIntegrations => "MANAGE_INTEGRATIONS",
            Self::ManageSubUsers => "MANAGE_SUB_USERS",
        }
    }
}
