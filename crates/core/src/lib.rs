//! `carrental-core` — domain modeling kernel.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! guards, enumerations, value objects, entities, aggregate factories and
//! specifications.

pub mod aggregate;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod guard;
pub mod id;
pub mod specification;
pub mod value_object;

pub use aggregate::{AggregateRoot, Factory};
pub use entity::{Entity, EntityId};
pub use enumeration::Enumeration;
pub use error::{
    DomainError, DomainResult, GuardFailure, InvalidCarAd, InvalidDealer, InvalidOptions,
    InvalidPhoneNumber,
};
pub use specification::{
    BoxedSpecification, Comparison, Expression, Operand, Queryable, Specification,
};
pub use value_object::ValueObject;

#[doc(hidden)]
pub use serde as __serde;
