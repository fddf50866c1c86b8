//! Strongly-typed identifiers used across the domain.
//!
//! Aggregate roots use time-ordered UUIDs generated at construction
//! ([`uuid_id!`](crate::uuid_id!)); reference entities such as categories use
//! integer ids assigned by persistence ([`int_id!`](crate::int_id!)). Both
//! treat their `Default` value (nil UUID / `0`) as "unset".

pub use uuid::Uuid;

/// Declare a UUID-backed identifier newtype.
#[macro_export]
macro_rules! uuid_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        $vis struct $name($crate::id::Uuid);

        impl $name {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self($crate::id::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: $crate::id::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::id::Uuid {
                &self.0
            }
        }

        impl $crate::entity::EntityId for $name {}

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::id::Uuid> for $name {
            fn from(value: $crate::id::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $crate::id::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::id::uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self($crate::id::Uuid::parse_str(s)?))
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                $crate::__serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                <$crate::id::Uuid as $crate::__serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}

/// Declare an integer-backed identifier newtype (assigned by persistence).
#[macro_export]
macro_rules! int_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        $vis struct $name(i32);

        impl $name {
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl $crate::entity::EntityId for $name {}

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                <i32 as $crate::__serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}

#[doc(hidden)]
pub use uuid;

#[cfg(test)]
mod tests {
    use crate::entity::EntityId;

    crate::uuid_id! {
        struct SampleId;
    }

    crate::int_id! {
        struct SampleKey;
    }

    #[test]
    fn defaults_are_the_unset_sentinel() {
        assert!(SampleId::default().is_unset());
        assert!(SampleKey::default().is_unset());
        assert!(!SampleId::new().is_unset());
        assert!(!SampleKey::new(3).is_unset());
    }

    #[test]
    fn uuid_ids_parse_and_display() {
        let id = SampleId::new();
        let parsed: SampleId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SampleId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&SampleKey::new(7)).unwrap(), "7");

        let id = SampleId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<SampleId>(&json).unwrap(), id);
    }
}
