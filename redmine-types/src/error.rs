use crate::{Entity, EntityKind};

/// Validation messages returned by the service after a rejected write.
///
/// Collections of these are never returned item by item: every message in
/// the response is joined into one `info` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessage {
    pub info: String,
}

impl ErrorMessage {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

impl Entity for ErrorMessage {
    const KIND: EntityKind = EntityKind::Error;
}
