//! Cart and order service.
//!
//! One cart per storefront process. Placing an order logs it and empties the
//! cart; nothing is persisted.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use thiserror::Error;

use food_delivery_core::{OrderId, Price, Product, ProductIndex};

use crate::catalog::Catalog;

/// Errors that can occur in storefront operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// The index does not point into the catalog.
    #[error("no product at index {0}")]
    ProductNotFound(ProductIndex),
}

/// Selected products and their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<Product>,
    pub total: Price,
}

impl Cart {
    /// Append a product and add its price to the total.
    pub fn add(&mut self, product: Product) {
        self.total += product.price;
        self.items.push(product);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// An order that was "placed".
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub items: Vec<Product>,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

/// Result of [`Storefront::place_order`].
#[derive(Debug, Clone)]
pub enum OrderOutcome {
    Placed(PlacedOrder),
    EmptyCart,
}

/// The storefront's in-process API: catalog, cart, orders.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Mutex<Cart>,
}

impl Storefront {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Mutex::new(Cart::default()),
        }
    }

    /// The static catalog.
    #[must_use]
    pub fn get_food_products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Snapshot of the current cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.lock_cart().clone()
    }

    /// Add the product at `index` to the cart and return the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if `index` is past the end
    /// of the catalog. The cart is unchanged in that case.
    pub fn add_to_cart(&self, index: ProductIndex) -> Result<Cart, StorefrontError> {
        let product = self
            .catalog
            .get(index)
            .ok_or(StorefrontError::ProductNotFound(index))?
            .clone();

        let mut cart = self.lock_cart();
        tracing::debug!(product = %product.name, price = %product.price, "Adding to cart");
        cart.add(product);
        Ok(cart.clone())
    }

    /// Place an order for everything in the cart and reset it.
    ///
    /// An empty cart is logged and reported, not treated as an error.
    pub fn place_order(&self) -> OrderOutcome {
        let cart = std::mem::take(&mut *self.lock_cart());

        if cart.is_empty() {
            tracing::info!("Cart is empty!");
            return OrderOutcome::EmptyCart;
        }

        let order = PlacedOrder {
            id: OrderId::new_v4(),
            items: cart.items,
            total: cart.total,
            placed_at: Utc::now(),
        };

        tracing::info!(order_id = %order.id, "Order placed!");
        tracing::info!("Items:");
        for item in &order.items {
            tracing::info!("{}", item.name);
        }
        tracing::info!(total = %order.total, "Total: {}", order.total);

        OrderOutcome::Placed(order)
    }

    fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        // Cart state stays consistent even if a holder panicked
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::food())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_food_products() {
        let storefront = Storefront::default();
        let names: Vec<&str> = storefront
            .get_food_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Pizza", "Burger", "Pasta", "Salad"]);
    }

    #[test]
    fn test_add_to_cart_updates_total() {
        let storefront = Storefront::default();
        storefront.add_to_cart(ProductIndex::new(0)).unwrap();
        let cart = storefront.add_to_cart(ProductIndex::new(1)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total, Price::whole(15));
        assert_eq!(storefront.cart(), cart);
    }

    #[test]
    fn test_same_product_twice_doubles_total() {
        let storefront = Storefront::default();
        let once = storefront.add_to_cart(ProductIndex::new(2)).unwrap().total;
        let twice = storefront.add_to_cart(ProductIndex::new(2)).unwrap().total;
        assert_eq!(twice, once + once);
    }

    #[test]
    fn test_add_out_of_range_leaves_cart_unchanged() {
        let storefront = Storefront::default();
        storefront.add_to_cart(ProductIndex::new(0)).unwrap();

        let err = storefront.add_to_cart(ProductIndex::new(4)).unwrap_err();
        assert_eq!(err, StorefrontError::ProductNotFound(ProductIndex::new(4)));
        assert_eq!(storefront.cart().len(), 1);
    }

    #[test]
    fn test_place_order_resets_cart() {
        let storefront = Storefront::default();
        storefront.add_to_cart(ProductIndex::new(0)).unwrap();

        let OrderOutcome::Placed(order) = storefront.place_order() else {
            panic!("expected a placed order");
        };
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Price::whole(10));

        let cart = storefront.cart();
        assert!(cart.is_empty());
        assert!(cart.total.is_zero());
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let storefront = Storefront::default();
        assert!(matches!(storefront.place_order(), OrderOutcome::EmptyCart));
        assert!(storefront.cart().is_empty());
    }
}
