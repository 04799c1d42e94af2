//! Cart form handlers.
//!
//! Plain HTML form posts that redirect back to the storefront page.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use food_delivery_core::ProductIndex;

use crate::error::Result;
use crate::services::OrderOutcome;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub index: ProductIndex,
}

/// Add item to cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    state.storefront().add_to_cart(form.index)?;
    Ok(Redirect::to("/"))
}

/// Place the order and report the outcome on the storefront page.
#[instrument(skip(state))]
pub async fn place_order(State(state): State<AppState>) -> Redirect {
    match state.storefront().place_order() {
        OrderOutcome::Placed(_) => Redirect::to("/?order=placed"),
        OrderOutcome::EmptyCart => Redirect::to("/?order=empty"),
    }
}
