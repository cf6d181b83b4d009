//! Serializer configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of payload characters kept in error messages.
pub const DEFAULT_PREVIEW_LENGTH: usize = 800;

/// Wire dialect of a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Extension appended to resource paths (`/issues/1.json`).
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// MIME type sent with request bodies.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Configuration for an [`EntitySerializer`](crate::EntitySerializer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Dialect used for both decoding and encoding.
    pub format: Format,
    /// Upper bound on payload length in bytes, for decode input and encode
    /// output. `None` means unbounded.
    pub max_payload_length: Option<usize>,
    /// Characters of payload kept in error context.
    pub preview_length: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            format: Format::Json,
            max_payload_length: None,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl SerializerConfig {
    /// Default settings for the given dialect.
    pub fn for_format(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}
