//! Serialization engine for Redmine entities.
//!
//! This crate handles:
//! - A registry mapping each [`EntityKind`](redmine_types::EntityKind) to its converter
//! - Decoding single entities and paged collections from JSON or XML payloads
//! - Encoding single entities for request bodies
//! - The custom field codec and the `errors` list aggregate
//!
//! # Design Principles
//!
//! - **One tree, two dialects**: both JSON and XML are parsed into [`Node`]
//!   before any typed conversion, so converters are written once
//! - **Converters see subtrees only**: root keys, paging fields and error
//!   context are handled by [`EntitySerializer`]
//! - **Registry is read-only after build**: safe to share across threads
//!
//! # Example
//!
//! ```
//! use redmine_serialization::EntitySerializer;
//! use redmine_types::Issue;
//!
//! let serializer = EntitySerializer::json();
//! let issue: Option<Issue> = serializer
//!     .decode_single(r#"{"issue":{"id":7,"subject":"Crash on save"}}"#, None)
//!     .unwrap();
//! assert_eq!(issue.unwrap().subject.as_deref(), Some("Crash on save"));
//! ```

mod config;
mod converter;
pub mod converters;
mod custom_field;
mod error;
mod error_aggregate;
pub mod json;
mod materialize;
mod node;
mod paged;
mod registry;
mod serializer;
pub mod xml;

pub use config::{DEFAULT_PREVIEW_LENGTH, Format, SerializerConfig};
pub use converter::{EntityConverter, ErasedConverter};
pub use custom_field::{CustomFieldValueConverter, IssueCustomFieldConverter};
pub use error::{
    ConvertError, ConvertResult, PayloadError, SerializationError, SerializationResult, XmlError,
};
pub use error_aggregate::aggregate as aggregate_errors;
pub use materialize::{flatten_with, materialize};
pub use node::{Mapping, Node, Scalar};
pub use paged::PagedList;
pub use registry::{ConverterRegistry, RegistryBuilder};
pub use serializer::EntitySerializer;
