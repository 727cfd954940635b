//! Payload contracts, one struct per subject.
//!
//! Field names are camelCase on the wire. Optional fields are omitted when
//! absent rather than sent as `null`; consumers branch on their presence.

pub mod brand;
pub mod category;
pub mod customer;
pub mod entity_version;
pub mod excel;
pub mod invoice;
pub mod notification;
pub mod order;
pub mod product;
pub mod shipment;
pub mod sync;

pub use brand::{BrandCreatedData, BrandUpdatedData, PlatformBrand, PlatformBrandSyncedData};
pub use category::{
    CategoryCreatedData, CategoryUpdatedData, PlatformCategory, PlatformCategorySyncedData,
};
pub use customer::{CustomerAddress, CustomerUpdatedData};
pub use entity_version::{EntityType, EntityVersion, EntityVersionBulkUpdatedData};
pub use excel::ExcelFileStoredData;
pub use invoice::InvoiceCreatedData;
pub use notification::NotificationCreatedData;
pub use order::{
    OrderCreatedData, OrderLine, OrderProductMatch, OrderProductUpdatedData, OrderUpdatedData,
    UpdateOrderCargoLabelData,
};
pub use product::{ProductCreatedData, ProductUpdatedData, StockUpdatedData};
pub use shipment::{ShipmentCreatedData, ShipmentUpdatedData};
pub use sync::SyncRequestedData;
