//! Converter registry, mapping each entity kind to its converter unit.
//!
//! A registry is assembled once through [`RegistryBuilder`] and is read-only
//! afterwards. [`ConverterRegistry::global`] holds the built-in converters for
//! every [`EntityKind`]; tests and embedders can build narrower registries.

use crate::converter::{EntityConverter, ErasedConverter};
use crate::converters;
use crate::custom_field::{CustomFieldValueConverter, IssueCustomFieldConverter};
use crate::error::{SerializationError, SerializationResult};
use redmine_types::{Entity, EntityKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::warn;

static GLOBAL: LazyLock<Arc<ConverterRegistry>> =
    LazyLock::new(|| Arc::new(ConverterRegistry::builtin()));

/// Immutable lookup table from entity kind to converter.
pub struct ConverterRegistry {
    converters: HashMap<EntityKind, Box<dyn ErasedConverter>>,
}

impl ConverterRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The process-wide registry of built-in converters, built on first use.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// A registry holding a converter for every [`EntityKind`].
    pub fn builtin() -> Self {
        Self::builder()
            .register(converters::IdentifiableNameConverter)
            .register(converters::IssueStatusConverter)
            .register(converters::TrackerConverter)
            .register(converters::RoleConverter)
            .register(converters::IssuePriorityConverter)
            .register(converters::TimeEntryActivityConverter)
            .register(converters::WatcherConverter)
            .register(converters::UploadConverter)
            .register(CustomFieldValueConverter)
            .register(IssueCustomFieldConverter)
            .register(converters::ErrorConverter)
            .register(converters::IssueConverter)
            .register(converters::ProjectConverter)
            .register(converters::UserConverter)
            .register(converters::NewsConverter)
            .build()
    }

    /// The converter for `kind`.
    pub fn lookup(&self, kind: EntityKind) -> SerializationResult<&dyn ErasedConverter> {
        self.converters
            .get(&kind)
            .map(|converter| &**converter)
            .ok_or(SerializationError::UnknownType { kind })
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<EntityKind> {
        let mut kinds: Vec<_> = self.converters.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// Collects converters before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    converters: HashMap<EntityKind, Box<dyn ErasedConverter>>,
}

impl RegistryBuilder {
    /// Adds `converter` under its entity's kind. A later registration for the
    /// same kind replaces the earlier one.
    pub fn register<C: EntityConverter>(mut self, converter: C) -> Self {
        let kind = C::Entity::KIND;
        if self.converters.insert(kind, Box::new(converter)).is_some() {
            warn!("Replacing converter already registered for {}", kind);
        }
        self
    }

    pub fn build(self) -> ConverterRegistry {
        ConverterRegistry {
            converters: self.converters,
        }
    }
}
