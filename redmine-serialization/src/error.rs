//! Error types for the serialization engine.
//!
//! Converters report [`ConvertError`]; the tree decoders report
//! [`PayloadError`]. Both are wrapped into [`SerializationError`] together
//! with the target type name and a bounded preview of the payload before
//! they reach the caller.

use redmine_types::EntityKind;
use thiserror::Error;

/// Result type for engine operations.
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Result type for converter units.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors surfaced by [`EntitySerializer`](crate::EntitySerializer).
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The requested kind has no converter in the registry.
    #[error("no converter registered for {kind}")]
    UnknownType { kind: EntityKind },

    /// An entity was handed in for encoding but its kind is not registered.
    #[error("cannot encode {type_name}: no converter registered")]
    UnregisteredType { type_name: &'static str },

    /// The payload exceeds `SerializerConfig::max_payload_length`.
    #[error("payload for {type_name} is {len} bytes, limit is {max}")]
    PayloadTooLarge {
        type_name: &'static str,
        len: usize,
        max: usize,
    },

    /// The payload text could not be turned into a tree.
    #[error("malformed payload for {type_name} from '{preview}'")]
    MalformedPayload {
        type_name: &'static str,
        preview: String,
        #[source]
        source: PayloadError,
    },

    /// A converter failed while reading or writing a subtree.
    #[error("an error on converting {type_name} from '{preview}'")]
    Conversion {
        type_name: &'static str,
        preview: String,
        #[source]
        source: ConvertError,
    },
}

/// Failures of the untyped tree decoders and encoders.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML: {0}")]
    Xml(#[from] XmlError),

    /// The document is valid but its root is not a mapping.
    #[error("expected a mapping at the document root, found {found}")]
    RootNotMapping { found: &'static str },
}

/// XML dialect errors.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error(transparent)]
    Syntax(#[from] quick_xml::Error),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// Errors raised by converter units.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required key is absent or null.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A key is present but its value has the wrong shape or content.
    #[error("field `{field}`: expected {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A node of the wrong shape was handed to a converter.
    #[error("expected {expected}, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
    },

    /// An erased converter received or produced a value of another type.
    #[error("converter for {expected} received a different entity type")]
    EntityMismatch { expected: &'static str },

    /// A failure inside a nested field.
    #[error("in field `{field}`: {source}")]
    InField {
        field: String,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Attaches the name of the enclosing field.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::InField {
            field: field.into(),
            source: Box::new(self),
        }
    }
}
