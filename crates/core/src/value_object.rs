//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// A value object compared by an ordered list of equality components.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `PhoneNumber { number: "+359123456789" }` is a value object
/// - `Dealer { id: DealerId(...), name: "..." }` is an entity
///
/// ## Immutability
///
/// Value objects are validated once, at construction, and never change
/// afterwards. To "modify" a value object, construct a new one.
///
/// ## Equality components
///
/// `equality_components` returns the atomic values that define the object, in
/// a fixed order. Equality compares them pairwise (`None` equals only `None`)
/// and hashing folds them in the same order, so equal objects hash equally.
/// Implement it with [`value_object!`](crate::value_object!) rather than by hand:
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct PhoneNumber {
///     number: String,
/// }
///
/// carrental_core::value_object!(PhoneNumber { number: String });
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {
    type Components<'a>: PartialEq + core::hash::Hash
    where
        Self: 'a;

    fn equality_components(&self) -> Self::Components<'_>;
}

/// Implement [`ValueObject`], `PartialEq`, `Eq` and `Hash` from an ordered field list.
#[macro_export]
macro_rules! value_object {
    ($t:ty { $($field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::value_object::ValueObject for $t {
            type Components<'a> = ($(&'a $ty,)+) where Self: 'a;

            fn equality_components(&self) -> Self::Components<'_> {
                ($(&self.$field,)+)
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::value_object::ValueObject::equality_components(self)
                    == $crate::value_object::ValueObject::equality_components(other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(
                    &$crate::value_object::ValueObject::equality_components(self),
                    state,
                );
            }
        }
    };
}
