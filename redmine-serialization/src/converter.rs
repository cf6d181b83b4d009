//! The converter contract.
//!
//! Each entity kind has one [`EntityConverter`]: a stateless unit that builds
//! the entity from a subtree and writes it back. The registry stores them
//! type-erased as [`ErasedConverter`] so one map can hold every kind.

use crate::error::{ConvertError, ConvertResult};
use crate::node::Node;
use redmine_types::{Entity, EntityKind};
use std::any::Any;

/// Typed decode/encode rules for one entity kind.
///
/// Implementations must not keep state between calls and must not retain the
/// node they are given.
pub trait EntityConverter: Send + Sync + 'static {
    type Entity: Entity;

    /// Builds the entity from the subtree found under its root key.
    fn decode(&self, node: &Node) -> ConvertResult<Self::Entity>;

    /// Produces the subtree written under the entity's element name.
    fn encode(&self, entity: &Self::Entity) -> ConvertResult<Node>;
}

/// Object-safe view of an [`EntityConverter`].
pub trait ErasedConverter: Send + Sync {
    fn kind(&self) -> EntityKind;

    fn decode_any(&self, node: &Node) -> ConvertResult<Box<dyn Any + Send>>;

    /// Fails with [`ConvertError::EntityMismatch`] when `entity` is not this
    /// converter's entity type.
    fn encode_any(&self, entity: &dyn Any) -> ConvertResult<Node>;
}

impl<C: EntityConverter> ErasedConverter for C {
    fn kind(&self) -> EntityKind {
        C::Entity::KIND
    }

    fn decode_any(&self, node: &Node) -> ConvertResult<Box<dyn Any + Send>> {
        let entity = self.decode(node)?;
        Ok(Box::new(entity))
    }

    fn encode_any(&self, entity: &dyn Any) -> ConvertResult<Node> {
        let entity = entity
            .downcast_ref::<C::Entity>()
            .ok_or(ConvertError::EntityMismatch {
                expected: C::Entity::KIND.type_name(),
            })?;
        self.encode(entity)
    }
}

/// Recovers a typed entity from an erased decode result.
pub(crate) fn downcast<T: Entity>(entity: Box<dyn Any + Send>) -> ConvertResult<T> {
    entity
        .downcast::<T>()
        .map(|entity| *entity)
        .map_err(|_| ConvertError::EntityMismatch {
            expected: T::KIND.type_name(),
        })
}
