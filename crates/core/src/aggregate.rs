//! Aggregate roots and the factories that build them.

use crate::entity::Entity;
use crate::error::DomainResult;

/// Aggregate root marker.
///
/// An aggregate root is the only entry point for changing itself and the
/// entities it owns. Fresh aggregates are produced by a [`Factory`]; stored
/// ones are rehydrated by the persistence layer.
pub trait AggregateRoot: Entity {}

/// Validating builder for an aggregate root.
///
/// Builders accumulate parts through `with_*` methods and hand back an
/// aggregate only when every required part is present and the aggregate's own
/// validation passes. `build` consumes the builder: start a new one for the
/// next aggregate.
pub trait Factory<T: AggregateRoot> {
    fn build(self) -> DomainResult<T>;
}
