//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_index!` macro to create type-safe position wrappers that
//! prevent accidentally mixing indexes into different collections.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe index wrapper.
///
/// Creates a newtype wrapper around `usize` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_usize()`
/// - `From<usize>` and `Into<usize>` implementations
///
/// # Example
///
/// ```rust
/// # use food_delivery_core::define_index;
/// define_index!(ProductIndex);
/// define_index!(LineIndex);
///
/// let product = ProductIndex::new(1);
/// let line = LineIndex::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ProductIndex = line;
/// ```
#[macro_export]
macro_rules! define_index {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index from a usize value.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the underlying usize value.
            #[must_use]
            pub const fn as_usize(&self) -> usize {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

define_index!(ProductIndex);

/// Identifier handed back when an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random order ID.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_index_serde_is_transparent() {
        let index = ProductIndex::new(3);
        assert_eq!(serde_json::to_string(&index).unwrap(), "3");
        let parsed: ProductIndex = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.as_usize(), 2);
    }

    #[test]
    fn test_order_ids_are_unique() {
        assert_ne!(OrderId::new_v4(), OrderId::new_v4());
    }
}
