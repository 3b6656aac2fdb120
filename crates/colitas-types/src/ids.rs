//! Type-safe string identifier wrappers.
//!
//! Every record in the directory has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. IDs come from the
//! data files (and from request paths) as plain strings, so construction
//! is fallible: an ID must be non-blank and must not contain `/`, which
//! would make it unroutable as a path segment.
//!
//! Animal IDs are only unique within their owning shelter. There is no
//! global animal ID space; every animal lookup is scoped by a
//! [`ShelterId`].

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An identifier string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id {value:?}: {reason}")]
pub struct InvalidId {
    /// Which identifier type was being constructed (e.g. `shelter`).
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: &'static str,
}

/// Check the rules shared by every identifier type.
fn check_id(kind: &'static str, value: &str) -> Result<(), InvalidId> {
    let reason = if value.trim().is_empty() {
        "must not be blank"
    } else if value.contains('/') {
        "must not contain '/'"
    } else {
        return Ok(());
    };

    Err(InvalidId {
        kind,
        value: value.to_owned(),
        reason,
    })
}

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(try_from = "String", into = "String")]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(String);

        impl $name {
            /// Human-readable name of this identifier type, used in errors.
            pub const KIND: &'static str = $kind;

            /// Parse an identifier from a borrowed string (e.g. a path segment).
            pub fn parse(raw: &str) -> Result<Self, InvalidId> {
                check_id($kind, raw)?;
                Ok(Self(raw.to_owned()))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidId;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                check_id($kind, &value)?;
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Hash/Eq of the newtype match `str`, so maps keyed by the ID can
        // be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a shelter across the loaded directory.
    ShelterId, "shelter"
}

define_id! {
    /// Identifier for an animal, unique only within its owning shelter.
    AnimalId, "animal"
}

define_id! {
    /// Identifier for a veterinary clinic entry.
    VeterinaryId, "veterinary"
}
