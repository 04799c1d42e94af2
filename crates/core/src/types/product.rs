//! Catalog product.

use serde::{Deserialize, Serialize};

use crate::Price;

/// A product offered by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
