//! Subject registry and the subject-keyed event union.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contract::EventData;
use crate::contracts::*;
use crate::error::EventError;

/// Declares the registry: one `Subject` variant, one `Event` variant and one
/// `EventData` impl per entry.
macro_rules! define_events {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $wire:literal, $data:ty;
        )*
    ) => {
        /// Message-bus subject identifying one event kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Subject {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Subject {
            /// Every registered subject.
            pub const ALL: &'static [Subject] = &[$(Subject::$variant),*];

            /// The routing key used on the bus.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl FromStr for Subject {
            type Err = EventError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err(EventError::UnknownSubject(s.to_string())),
                }
            }
        }

        /// A decoded bus message, keyed by subject.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $(
                $(#[$meta])*
                $variant($data),
            )*
        }

        impl Event {
            /// The subject this event belongs to.
            pub fn subject(&self) -> Subject {
                match self {
                    $(Self::$variant(_) => Subject::$variant,)*
                }
            }

            /// Decodes a raw message received on `subject`.
            pub fn decode(subject: &str, payload: &str) -> Result<Self, EventError> {
                match subject.parse::<Subject>()? {
                    $(
                        Subject::$variant => serde_json::from_str::<$data>(payload)
                            .map(Self::$variant)
                            .map_err(|source| EventError::Payload { subject: $wire, source }),
                    )*
                }
            }

            /// Serializes the payload exactly as a publisher would.
            pub fn to_json(&self) -> Result<String, serde_json::Error> {
                match self {
                    $(Self::$variant(data) => serde_json::to_string(data),)*
                }
            }
        }

        $(
            impl EventData for $data {
                const SUBJECT: Subject = Subject::$variant;
            }

            impl From<$data> for Event {
                fn from(data: $data) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

define_events! {
    /// A merchant brand was created.
    BrandCreated => "brand:created", BrandCreatedData;
    /// A merchant brand changed.
    BrandUpdated => "brand:updated", BrandUpdatedData;
    /// A merchant category was created.
    CategoryCreated => "category:created", CategoryCreatedData;
    /// A merchant category changed.
    CategoryUpdated => "category:updated", CategoryUpdatedData;
    /// Customer details changed.
    CustomerUpdated => "customer:updated", CustomerUpdatedData;
    /// Versions of many entities were bumped in one operation.
    EntityVersionBulkUpdated => "entity-version:bulk-updated", EntityVersionBulkUpdatedData;
    /// An excel import/export file was written to storage.
    ExcelFileStored => "excel:file-stored", ExcelFileStoredData;
    /// A user-facing notification was created.
    NotificationCreated => "notification:created", NotificationCreatedData;
    /// An order was imported from a marketplace.
    OrderCreated => "order:created", OrderCreatedData;
    /// An order changed status.
    OrderUpdated => "order:updated", OrderUpdatedData;
    /// Order lines were matched to catalog products.
    OrderProductUpdated => "order-product:updated", OrderProductUpdatedData;
    /// Marketplace brands were synchronised.
    PlatformBrandSynced => "platform-brand:synced", PlatformBrandSyncedData;
    /// Marketplace categories were synchronised.
    PlatformCategorySynced => "platform-category:synced", PlatformCategorySyncedData;
    /// A catalog product was created.
    ProductCreated => "product:created", ProductCreatedData;
    /// A catalog product changed.
    ProductUpdated => "product:updated", ProductUpdatedData;
    /// Stock for a product changed.
    StockUpdated => "stock:updated", StockUpdatedData;
    /// An invoice was issued for an order.
    InvoiceCreated => "invoice:created", InvoiceCreatedData;
    /// A shipment was created for an order.
    ShipmentCreated => "shipment:created", ShipmentCreatedData;
    /// A shipment changed status.
    ShipmentUpdated => "shipment:updated", ShipmentUpdatedData;
    /// A platform synchronisation was requested.
    SyncRequested => "sync:requested", SyncRequestedData;
    /// The cargo label of an order must be (re)requested.
    UpdateOrderCargoLabel => "order:update-cargo-label", UpdateOrderCargoLabelData;
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_subjects_are_unique() {
        let wire: HashSet<&str> = Subject::ALL.iter().map(Subject::as_str).collect();
        assert_eq!(wire.len(), Subject::ALL.len());
    }

    #[test]
    fn test_subject_round_trips_through_str() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>().unwrap(), *subject);
        }
    }

    #[test]
    fn test_unknown_subject() {
        let err = Event::decode("brand:deleted", "{}").unwrap_err();
        assert!(matches!(err, EventError::UnknownSubject(s) if s == "brand:deleted"));
    }

    #[test]
    fn test_decode_selects_contract_by_subject() {
        let payload = r#"{
            "id": "b1",
            "userId": "u1",
            "name": "Acme",
            "version": 2,
            "timestamp": "2024-05-01T10:00:00Z"
        }"#;

        let event = Event::decode("brand:updated", payload).unwrap();
        assert_eq!(event.subject(), Subject::BrandUpdated);
        match event {
            Event::BrandUpdated(data) => {
                assert_eq!(data.name, "Acme");
                assert_eq!(data.code, None);
                assert_eq!(data.version, 2);
                assert_eq!(
                    data.timestamp,
                    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
                );
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_payload_of_other_contract() {
        let payload = r#"{"id": "b1", "userId": "u1", "name": "Acme"}"#;
        let err = Event::decode("shipment:created", payload).unwrap_err();
        assert!(matches!(
            err,
            EventError::Payload { subject: "shipment:created", .. }
        ));
    }

    #[test]
    fn test_event_data_subject_binding() {
        assert_eq!(ExcelFileStoredData::SUBJECT, Subject::ExcelFileStored);
        assert_eq!(
            UpdateOrderCargoLabelData::SUBJECT.as_str(),
            "order:update-cargo-label"
        );
    }

    #[test]
    fn test_subject_serde() {
        let json = serde_json::to_string(&Subject::SyncRequested).unwrap();
        assert_eq!(json, "\"sync:requested\"");
        let parsed: Subject = serde_json::from_str("\"stock:updated\"").unwrap();
        assert_eq!(parsed, Subject::StockUpdated);
        assert!(serde_json::from_str::<Subject>("\"nope\"").is_err());
    }
}
