//! Shared cargo-label support rules.
//!
//! Calling code asks whether a marketplace can print a shared shipping label
//! for a given carrier, or whether it must fall back to the carrier's own
//! platform-specific flow.

use crate::types::{Carrier, Platform};

/// Carrier id Hepsiburada assigns to merchants shipping with their own
/// store account. Such orders must never use platform labels.
pub const HEPSIBURADA_STORE_ACCOUNT_CARRIER_ID: &str = "89100";

/// Static `(platform, carrier) -> supported` table.
///
/// Pairs absent from the table are unsupported.
pub const CARGO_LABEL_SUPPORT: &[(Platform, Carrier, bool)] = &[
    (Platform::Hepsiburada, Carrier::HepsiJet, true),
    (Platform::Hepsiburada, Carrier::Aras, true),
    (Platform::Hepsiburada, Carrier::Yurtici, false),
    (Platform::Hepsiburada, Carrier::Mng, false),
    (Platform::Hepsiburada, Carrier::Ptt, false),
    (Platform::Hepsiburada, Carrier::Surat, false),
    (Platform::Trendyol, Carrier::TrendyolExpress, true),
    (Platform::Trendyol, Carrier::Aras, true),
    (Platform::Trendyol, Carrier::Yurtici, true),
    (Platform::Trendyol, Carrier::Mng, true),
    (Platform::Trendyol, Carrier::Ptt, true),
    (Platform::Trendyol, Carrier::Surat, true),
    (Platform::Trendyol, Carrier::Ups, true),
    (Platform::Trendyol, Carrier::Sendeo, false),
    (Platform::N11, Carrier::Yurtici, true),
    (Platform::N11, Carrier::Aras, true),
    (Platform::N11, Carrier::Mng, true),
    (Platform::N11, Carrier::Ptt, false),
    (Platform::Pazarama, Carrier::Yurtici, true),
    (Platform::Ciceksepeti, Carrier::Mng, true),
];

/// Whether `platform` can produce a shared label for `carrier`.
pub fn supports_platform_label(platform: Platform, carrier: Carrier) -> bool {
    CARGO_LABEL_SUPPORT
        .iter()
        .find(|(p, c, _)| *p == platform && *c == carrier)
        .map(|(_, _, supported)| *supported)
        .unwrap_or(false)
}

/// Whether Hepsiburada supports shared labels for this carrier code.
///
/// Only HepsiJet and Aras qualify; unknown codes are unsupported.
pub fn has_hepsiburada_label_support(carrier_code: &str) -> bool {
    Carrier::from_code(carrier_code)
        .map(|carrier| supports_platform_label(Platform::Hepsiburada, carrier))
        .unwrap_or(false)
}

/// Whether the carrier id is Hepsiburada's store-account carrier.
pub fn is_hepsiburada_store_account(carrier_id: &str) -> bool {
    carrier_id.trim() == HEPSIBURADA_STORE_ACCOUNT_CARRIER_ID
}
