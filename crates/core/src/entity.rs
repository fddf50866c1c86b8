//! Entity trait: identity + continuity across state changes.
//!
//! Entities are equal when they are the same concrete type and carry the same
//! *assigned* id. An id still at its unset sentinel (`Default`) marks an
//! instance that has not been persisted yet; such instances are only ever
//! equal to themselves (by reference).

use core::any::{Any, TypeId};

/// Identifier usable as an entity id.
///
/// The `Default` value is the "unset" sentinel.
pub trait EntityId: Clone + Eq + core::hash::Hash + core::fmt::Debug + Default + 'static {
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Entity marker + minimal interface.
pub trait Entity: Any {
    /// Strongly-typed entity identifier.
    type Id: EntityId;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity equality between any two entities.
///
/// - the same object is always equal to itself;
/// - different concrete types are never equal, whatever their ids;
/// - an unset id is never equal to anything else;
/// - otherwise, equal iff the ids are equal.
pub fn same_identity<A: Entity, B: Entity>(a: &A, b: &B) -> bool {
    if TypeId::of::<A>() != TypeId::of::<B>() {
        return false;
    }

    let Some(b) = (b as &dyn Any).downcast_ref::<A>() else {
        return false;
    };

    if core::ptr::eq(a, b) {
        return true;
    }

    if a.id().is_unset() || b.id().is_unset() {
        return false;
    }

    a.id() == b.id()
}

/// Hash an entity by (concrete type name, id), consistent with [`same_identity`].
pub fn hash_identity<E: Entity, H: core::hash::Hasher>(entity: &E, state: &mut H) {
    core::hash::Hash::hash(core::any::type_name::<E>(), state);
    core::hash::Hash::hash(entity.id(), state);
}

/// Implement `PartialEq`, `Eq` and `Hash` for an entity from its identity.
#[macro_export]
macro_rules! entity_identity {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::entity::same_identity(self, other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $crate::entity::hash_identity(self, state);
            }
        }
    };
}
