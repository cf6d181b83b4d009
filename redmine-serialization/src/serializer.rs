//! Top-level dispatcher.
//!
//! [`EntitySerializer`] turns payload text into entities and back. It owns
//! everything every kind has in common: parsing the dialect, finding the root
//! key, reading paging siblings, routing error lists to the aggregate, and
//! wrapping failures with the type name and a payload preview. Converters
//! only ever see the subtree for their entity.

use crate::config::{Format, SerializerConfig};
use crate::converter::{ErasedConverter, downcast};
use crate::error::{
    ConvertError, ConvertResult, PayloadError, SerializationError, SerializationResult,
};
use crate::error_aggregate;
use crate::materialize::materialize;
use crate::node::{Mapping, Node, Scalar};
use crate::paged::PagedList;
use crate::registry::ConverterRegistry;
use crate::{converters::fields, json, xml};
use redmine_types::{Entity, EntityKind};
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

const TOTAL_COUNT: &str = "total_count";
const OFFSET: &str = "offset";
const LIMIT: &str = "limit";

/// Decodes and encodes entities with a fixed registry and configuration.
///
/// Cheap to clone; the registry is shared.
#[derive(Debug, Clone)]
pub struct EntitySerializer {
    registry: Arc<ConverterRegistry>,
    config: SerializerConfig,
}

impl Default for EntitySerializer {
    fn default() -> Self {
        Self::new(SerializerConfig::default())
    }
}

impl EntitySerializer {
    /// Uses the global registry of built-in converters.
    pub fn new(config: SerializerConfig) -> Self {
        Self::with_registry(ConverterRegistry::global(), config)
    }

    pub fn with_registry(registry: Arc<ConverterRegistry>, config: SerializerConfig) -> Self {
        Self { registry, config }
    }

    pub fn json() -> Self {
        Self::new(SerializerConfig::for_format(Format::Json))
    }

    pub fn xml() -> Self {
        Self::new(SerializerConfig::for_format(Format::Xml))
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn format(&self) -> Format {
        self.config.format
    }

    /// Decodes the entity found under `root` in `payload`.
    ///
    /// `root` defaults to the lowercased type name and is matched ignoring
    /// case. Returns `Ok(None)` for an empty payload, a null document, or a
    /// document without the root key.
    pub fn decode_single<T: Entity>(
        &self,
        payload: &str,
        root: Option<&str>,
    ) -> SerializationResult<Option<T>> {
        let converter = self.registry.lookup(T::KIND)?;
        let key = root.map_or_else(|| T::KIND.default_root(), str::to_ascii_lowercase);
        debug!("Decoding {} from {} payload under `{}`", T::KIND, self.config.format, key);

        let Some(document) = self.parse_document(payload, T::KIND)? else {
            return Ok(None);
        };
        let Some(node) = document.get_ignore_case(&key) else {
            debug!("No `{}` key in {} payload", key, T::KIND);
            return Ok(None);
        };

        converter
            .decode_any(node)
            .and_then(downcast::<T>)
            .map(Some)
            .map_err(|source| self.conversion_error(T::KIND, payload, source))
    }

    /// Decodes the list found under `root` in `payload`, along with the
    /// paging fields reported next to it.
    ///
    /// `root` defaults to the kind's collection name (`issues`,
    /// `custom_fields`, ...). Nested arrays are flattened. A list of
    /// [`ErrorMessage`](redmine_types::ErrorMessage) is joined into a single
    /// entry.
    pub fn decode_collection<T: Entity>(
        &self,
        payload: &str,
        root: Option<&str>,
    ) -> SerializationResult<Option<PagedList<T>>> {
        let converter = self.registry.lookup(T::KIND)?;
        let key = root.map_or_else(
            || T::KIND.collection_name().to_string(),
            str::to_ascii_lowercase,
        );
        debug!("Decoding {} list from {} payload under `{}`", T::KIND, self.config.format, key);

        let Some(document) = self.parse_document(payload, T::KIND)? else {
            return Ok(None);
        };
        let Some(node) = document.get_ignore_case(&key) else {
            debug!("No `{}` key in {} list payload", key, T::KIND);
            return Ok(None);
        };

        read_page::<T>(converter, &document, node)
            .map(Some)
            .map_err(|source| self.conversion_error(T::KIND, payload, source))
    }

    /// Encodes `entity` under its kind's element name.
    pub fn encode_single<T: Entity>(&self, entity: &T) -> SerializationResult<String> {
        let kind = T::KIND;
        let converter =
            self.registry
                .lookup(kind)
                .map_err(|_| SerializationError::UnregisteredType {
                    type_name: kind.type_name(),
                })?;
        debug!("Encoding {} as {}", kind, self.config.format);

        let node = converter
            .encode_any(entity)
            .map_err(|source| SerializationError::Conversion {
                type_name: kind.type_name(),
                preview: self.preview(&format!("{entity:?}")),
                source,
            })?;
        let payload = self.write_document(kind.element_name(), node).map_err(|source| {
            SerializationError::MalformedPayload {
                type_name: kind.type_name(),
                preview: self.preview(&format!("{entity:?}")),
                source,
            }
        })?;
        self.check_length(kind, payload.len())?;
        Ok(payload)
    }

    /// Parses `payload` into its root mapping. `None` for empty input or a
    /// null document.
    fn parse_document(
        &self,
        payload: &str,
        kind: EntityKind,
    ) -> SerializationResult<Option<Mapping>> {
        if payload.trim().is_empty() {
            return Ok(None);
        }
        self.check_length(kind, payload.len())?;

        let tree = match self.config.format {
            Format::Json => json::parse(payload).map_err(PayloadError::from),
            Format::Xml => xml::parse(payload).map_err(PayloadError::from),
        }
        .map_err(|source| self.malformed_error(kind, payload, source))?;

        match tree {
            Node::Mapping(document) => Ok(Some(document)),
            Node::Scalar(Scalar::Null) => Ok(None),
            other => Err(self.malformed_error(
                kind,
                payload,
                PayloadError::RootNotMapping {
                    found: other.kind_name(),
                },
            )),
        }
    }

    fn write_document(&self, root: &str, node: Node) -> Result<String, PayloadError> {
        match self.config.format {
            Format::Json => Ok(json::write(root, node)?),
            Format::Xml => Ok(xml::write(root, &node)?),
        }
    }

    fn check_length(&self, kind: EntityKind, len: usize) -> SerializationResult<()> {
        match self.config.max_payload_length {
            Some(max) if len > max => Err(SerializationError::PayloadTooLarge {
                type_name: kind.type_name(),
                len,
                max,
            }),
            _ => Ok(()),
        }
    }

    fn preview(&self, text: &str) -> String {
        preview(text, self.config.preview_length)
    }

    fn malformed_error(
        &self,
        kind: EntityKind,
        payload: &str,
        source: PayloadError,
    ) -> SerializationError {
        SerializationError::MalformedPayload {
            type_name: kind.type_name(),
            preview: self.preview(payload),
            source,
        }
    }

    fn conversion_error(
        &self,
        kind: EntityKind,
        payload: &str,
        source: ConvertError,
    ) -> SerializationError {
        SerializationError::Conversion {
            type_name: kind.type_name(),
            preview: self.preview(payload),
            source,
        }
    }
}

fn read_page<T: Entity>(
    converter: &dyn ErasedConverter,
    document: &Mapping,
    node: &Node,
) -> ConvertResult<PagedList<T>> {
    let total_count = fields::u32_field(document, TOTAL_COUNT)?.unwrap_or(0);
    let offset = fields::u32_field(document, OFFSET)?;
    let limit = fields::u32_field(document, LIMIT)?;

    let entities = if T::KIND == EntityKind::Error {
        let joined: Box<dyn Any + Send> = Box::new(error_aggregate::aggregate(node)?);
        vec![joined]
    } else {
        materialize(converter, node)?
    };
    let items = entities
        .into_iter()
        .map(downcast::<T>)
        .collect::<ConvertResult<Vec<_>>>()?;

    Ok(PagedList {
        items,
        total_count,
        offset,
        limit,
    })
}

/// The first `max_chars` characters of `text`.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
