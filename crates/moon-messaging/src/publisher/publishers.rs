//! One publisher per subject.
//!
//! Most are plain [`Publisher`]s. Excel-file and notification events are
//! user-visible, so they go through [`RetryingPublisher`].

use moon_events::*;

use super::base::Publisher;
use super::retry::RetryingPublisher;

pub type BrandCreatedPublisher = Publisher<BrandCreatedData>;
pub type BrandUpdatedPublisher = Publisher<BrandUpdatedData>;
pub type CategoryCreatedPublisher = Publisher<CategoryCreatedData>;
pub type CategoryUpdatedPublisher = Publisher<CategoryUpdatedData>;
pub type CustomerUpdatedPublisher = Publisher<CustomerUpdatedData>;
pub type EntityVersionBulkUpdatedPublisher = Publisher<EntityVersionBulkUpdatedData>;
pub type OrderCreatedPublisher = Publisher<OrderCreatedData>;
pub type OrderUpdatedPublisher = Publisher<OrderUpdatedData>;
pub type OrderProductUpdatedPublisher = Publisher<OrderProductUpdatedData>;
pub type PlatformBrandSyncedPublisher = Publisher<PlatformBrandSyncedData>;
pub type PlatformCategorySyncedPublisher = Publisher<PlatformCategorySyncedData>;
pub type ProductCreatedPublisher = Publisher<ProductCreatedData>;
pub type ProductUpdatedPublisher = Publisher<ProductUpdatedData>;
pub type StockUpdatedPublisher = Publisher<StockUpdatedData>;
pub type InvoiceCreatedPublisher = Publisher<InvoiceCreatedData>;
pub type ShipmentCreatedPublisher = Publisher<ShipmentCreatedData>;
pub type ShipmentUpdatedPublisher = Publisher<ShipmentUpdatedData>;
pub type SyncRequestedPublisher = Publisher<SyncRequestedData>;
pub type UpdateOrderCargoLabelPublisher = Publisher<UpdateOrderCargoLabelData>;

/// Retries up to [`RetryPolicy::DEFAULT_MAX_ATTEMPTS`](super::RetryPolicy::DEFAULT_MAX_ATTEMPTS) times by default.
pub type ExcelFileStoredPublisher = RetryingPublisher<ExcelFileStoredData>;
/// Retries up to [`RetryPolicy::DEFAULT_MAX_ATTEMPTS`](super::RetryPolicy::DEFAULT_MAX_ATTEMPTS) times by default.
pub type NotificationCreatedPublisher = RetryingPublisher<NotificationCreatedData>;
