//! JSON API handlers.
//!
//! Prices go out as plain JSON numbers (`"price": 10.0`), not as the
//! internal amount/currency pair.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use food_delivery_core::{OrderId, Product, ProductIndex};

use crate::error::Result;
use crate::services::{Cart, OrderOutcome};
use crate::state::AppState;

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub index: ProductIndex,
}

// =============================================================================
// Response Bodies
// =============================================================================

/// A menu entry or cart line.
#[derive(Debug, Serialize)]
pub struct ItemJson {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&Product> for ItemJson {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.amount,
        }
    }
}

/// Cart contents and running total.
#[derive(Debug, Serialize)]
pub struct CartJson {
    pub items: Vec<ItemJson>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<&Cart> for CartJson {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items.iter().map(ItemJson::from).collect(),
            total: cart.total.amount,
        }
    }
}

/// Result of placing an order, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderJson {
    Placed {
        id: OrderId,
        items: Vec<ItemJson>,
        #[serde(with = "rust_decimal::serde::float")]
        total: Decimal,
        placed_at: DateTime<Utc>,
    },
    EmptyCart,
}

impl From<OrderOutcome> for OrderJson {
    fn from(outcome: OrderOutcome) -> Self {
        match outcome {
            OrderOutcome::Placed(order) => Self::Placed {
                id: order.id,
                items: order.items.iter().map(ItemJson::from).collect(),
                total: order.total.amount,
                placed_at: order.placed_at,
            },
            OrderOutcome::EmptyCart => Self::EmptyCart,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List the catalog.
pub async fn products(State(state): State<AppState>) -> Json<Vec<ItemJson>> {
    Json(
        state
            .storefront()
            .get_food_products()
            .iter()
            .map(ItemJson::from)
            .collect(),
    )
}

/// Current cart contents and total.
pub async fn cart(State(state): State<AppState>) -> Json<CartJson> {
    Json(CartJson::from(&state.storefront().cart()))
}

/// Add a product to the cart.
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartJson>> {
    let cart = state.storefront().add_to_cart(request.index)?;
    Ok(Json(CartJson::from(&cart)))
}

/// Place an order for the current cart.
#[instrument(skip(state))]
pub async fn place_order(State(state): State<AppState>) -> Json<OrderJson> {
    Json(OrderJson::from(state.storefront().place_order()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::Storefront;

    #[test]
    fn test_item_price_is_a_number() {
        let storefront = Storefront::default();
        let pizza = &storefront.get_food_products()[0];
        let json = serde_json::to_value(ItemJson::from(pizza)).unwrap();
        assert_eq!(json, json!({"name": "Pizza", "price": 10.0}));
    }

    #[test]
    fn test_cart_json_total() {
        let storefront = Storefront::default();
        storefront.add_to_cart(ProductIndex::new(1)).unwrap();
        let cart = storefront.add_to_cart(ProductIndex::new(3)).unwrap();

        let json = serde_json::to_value(CartJson::from(&cart)).unwrap();
        assert_eq!(json["total"], 11.0);
        assert_eq!(json["items"][1], json!({"name": "Salad", "price": 6.0}));
    }

    #[test]
    fn test_order_json_status() {
        let storefront = Storefront::default();
        let json = serde_json::to_value(OrderJson::from(storefront.place_order())).unwrap();
        assert_eq!(json, json!({"status": "empty_cart"}));

        storefront.add_to_cart(ProductIndex::new(1)).unwrap();
        let json = serde_json::to_value(OrderJson::from(storefront.place_order())).unwrap();
        assert_eq!(json["status"], "placed");
        assert_eq!(json["items"][0]["name"], "Burger");
        assert_eq!(json["total"], 5.0);
        assert!(json["id"].is_string());
    }
}
