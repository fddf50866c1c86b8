//! Closed, type-safe enumerations ("smart enums").
//!
//! An enumeration is a fixed set of named constants, each carrying a unique
//! integer value. The member set of each type is a static array declared next
//! to the type, so there is nothing to discover or cache at runtime and lookups
//! are safe from any thread.
//!
//! Use the [`enumeration!`](crate::enumeration!) macro to declare one:
//!
//! ```
//! carrental_core::enumeration! {
//!     /// Fuel used by a vehicle.
//!     pub enum FuelType {
//!         Petrol = 1,
//!         Diesel = 2,
//!     }
//! }
//!
//! use carrental_core::enumeration::{self, Enumeration};
//!
//! assert_eq!(enumeration::from_value::<FuelType>(2).unwrap(), FuelType::Diesel);
//! assert_eq!(FuelType::Petrol.name(), "Petrol");
//! ```

use crate::error::{DomainError, DomainResult};

/// A closed set of named constants with unique integer values.
///
/// Equality and hashing are defined by (type, value); the natural order is by
/// value.
pub trait Enumeration: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + 'static {
    /// Type name used in lookup errors.
    const TYPE_NAME: &'static str;

    /// Every declared member, in declaration order.
    const MEMBERS: &'static [Self];

    fn value(&self) -> i32;

    fn name(&self) -> &'static str;
}

/// All declared members of `E`, in declaration order. Restartable by calling again
/// or cloning the iterator.
pub fn get_all<E: Enumeration>() -> impl Iterator<Item = E> + Clone {
    E::MEMBERS.iter().copied()
}

/// Look up the member whose value is `value`.
pub fn from_value<E: Enumeration>(value: i32) -> DomainResult<E> {
    parse(value, "value", |member: &E| member.value() == value)
}

/// Look up the member whose name is exactly `name`.
pub fn from_name<E: Enumeration>(name: &str) -> DomainResult<E> {
    parse(name, "name", |member: &E| member.name() == name)
}

/// Whether every member of `E` has a distinct value and a distinct name.
pub fn has_unique_members<E: Enumeration>() -> bool {
    let members = E::MEMBERS;
    members.iter().enumerate().all(|(i, a)| {
        members[i + 1..]
            .iter()
            .all(|b| a.value() != b.value() && a.name() != b.name())
    })
}

fn parse<E, V>(value: V, description: &'static str, predicate: impl Fn(&E) -> bool) -> DomainResult<E>
where
    E: Enumeration,
    V: ToString,
{
    get_all::<E>()
        .find(|member| predicate(member))
        .ok_or_else(|| DomainError::enumeration_not_found(value, description, E::TYPE_NAME))
}

/// Declare a closed enumeration.
///
/// Generates the enum, its [`Enumeration`] impl, value-based
/// `PartialEq`/`Eq`/`Hash`/`Ord`, `Display` (the member name), `TryFrom<i32>`,
/// `FromStr` (by name), and serde support as the integer value.
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::enumeration::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            fn value(&self) -> i32 {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::enumeration::Enumeration::value(self)
                    == $crate::enumeration::Enumeration::value(other)
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(<Self as $crate::enumeration::Enumeration>::TYPE_NAME, state);
                core::hash::Hash::hash(&$crate::enumeration::Enumeration::value(self), state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                $crate::enumeration::Enumeration::value(self)
                    .cmp(&$crate::enumeration::Enumeration::value(other))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::enumeration::Enumeration::name(self))
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                $crate::enumeration::from_value(value)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::enumeration::from_name(s)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_i32($crate::enumeration::Enumeration::value(self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let value = <i32 as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                $crate::enumeration::from_value(value)
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}
