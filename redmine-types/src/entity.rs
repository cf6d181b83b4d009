use crate::EntityKind;
use std::fmt;

/// A record the serialization engine knows how to convert.
///
/// Implementors are plain data: every field is public and there is no
/// behavior beyond identity. The engine looks up the converter for a record
/// through [`Entity::KIND`].
pub trait Entity: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// The registry key for this record type.
    const KIND: EntityKind;
}
