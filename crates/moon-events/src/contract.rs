//! The subject/payload pairing trait.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::catalog::Subject;

/// A payload bound to exactly one subject of the registry.
///
/// Implemented once per subject by the catalog; publishers are generic over
/// it so a payload can only ever be sent to its own subject.
pub trait EventData: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The subject this payload is published on.
    const SUBJECT: Subject;
}
