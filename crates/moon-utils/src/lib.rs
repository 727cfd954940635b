//! # moon-utils
//!
//! Pure helper functions used across Moon services: content hashing for
//! delta sync, excel storage paths, excel job access checks and expiration
//! dates. None of them perform I/O.

pub mod access;
pub mod excel;
pub mod expiration;
pub mod hash;

pub use access::{ExcelJobOwner, ExcelJobRef, can_access_excel_job};
pub use excel::{excel_file_name, excel_object_key, excel_storage_dir};
pub use expiration::{EXPIRATION_DAYS, expiration_date, expiration_date_from};
pub use hash::{ContentFields, content_hash};
