//! Shared enumerations and request-scoped user types.

pub mod permission;
pub mod platform;
pub mod role;
pub mod status;
pub mod user;

pub use permission::Permission;
pub use platform::{Carrier, Platform};
pub use role::UserRole;
pub use status::{
    ExcelJobStatus, ExcelOperation, NotificationType, OrderStatus, ShipmentStatus, SyncStatus,
};
pub use user::CurrentUser;
