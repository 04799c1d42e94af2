//! Storefront page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use food_delivery_core::Product;

use crate::services::Cart;
use crate::state::AppState;

/// Menu entry display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub index: usize,
    pub name: String,
    pub price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<String>,
    pub total: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items.iter().map(|p| p.name.clone()).collect(),
            total: cart.total.to_string(),
        }
    }
}

fn product_views(products: &[Product]) -> Vec<ProductView> {
    products
        .iter()
        .enumerate()
        .map(|(index, p)| ProductView {
            index,
            name: p.name.clone(),
            price: p.price.to_string(),
        })
        .collect()
}

/// Query parameters set by the order redirect.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub order: Option<String>,
}

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "main.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub notice: Option<&'static str>,
}

/// Display the storefront page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> HomeTemplate {
    let storefront = state.storefront();
    let notice = match query.order.as_deref() {
        Some("placed") => Some("Order placed!"),
        Some("empty") => Some("Cart is empty!"),
        _ => None,
    };

    HomeTemplate {
        products: product_views(storefront.get_food_products()),
        cart: CartView::from(&storefront.cart()),
        notice,
    }
}
