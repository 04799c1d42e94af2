//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Storefront page (menu, cart, order button)
//! GET  /health            - Health check
//!
//! # Cart (HTML forms, redirect back to /)
//! POST /cart/add          - Add product by index
//! POST /orders            - Place order
//!
//! # JSON API
//! GET  /api/products      - Catalog
//! GET  /api/cart          - Current cart
//! POST /api/cart/add      - Add product by index, returns cart
//! POST /api/orders        - Place order, returns outcome
//! ```

pub mod api;
pub mod cart;
pub mod home;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart form routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/add", post(cart::add))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products))
        .route("/cart", get(api::cart))
        .route("/cart/add", post(api::add_to_cart))
        .route("/orders", post(api::place_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health))
        // Cart form routes
        .nest("/cart", cart_routes())
        .route("/orders", post(cart::place_order))
        // JSON API
        .nest("/api", api_routes())
        .fallback(not_found)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::app;
    use crate::config::StorefrontConfig;
    use crate::services::Storefront;

    fn test_app() -> (AppState, Router) {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        let state = AppState::new(config, Storefront::default());
        (state.clone(), app(state))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_, app) = test_app();
        let (status, body) = send(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_api_products() {
        let (_, app) = test_app();
        let (status, body) =
            send(&app, Request::get("/api/products").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);

        let products: Value = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = products
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Pizza", "Burger", "Pasta", "Salad"]);
        assert_eq!(products[0]["price"], 10.0);
    }

    #[tokio::test]
    async fn test_api_add_then_order() {
        let (state, app) = test_app();

        let (status, body) = send(&app, json_post("/api/cart/add", r#"{"index": 0}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let cart: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);

        let (status, body) = send(&app, json_post("/api/orders", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        let outcome: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome["status"], "placed");
        assert!(state.storefront().cart().is_empty());

        let (_, body) = send(&app, json_post("/api/orders", "{}")).await;
        let outcome: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome["status"], "empty_cart");
    }

    #[tokio::test]
    async fn test_api_add_out_of_range_is_not_found() {
        let (state, app) = test_app();
        let (status, _) = send(&app, json_post("/api/cart/add", r#"{"index": 7}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(state.storefront().cart().is_empty());
    }

    #[tokio::test]
    async fn test_form_add_redirects_home() {
        let (state, app) = test_app();
        let response = app.oneshot(form_post("/cart/add", "index=3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(state.storefront().cart().items[0].name, "Salad");
    }

    #[tokio::test]
    async fn test_form_order_redirects_with_outcome() {
        let (_, app) = test_app();

        let response = app.clone().oneshot(form_post("/orders", "")).await.unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/?order=empty");

        app.clone()
            .oneshot(form_post("/cart/add", "index=1"))
            .await
            .unwrap();
        let response = app.oneshot(form_post("/orders", "")).await.unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/?order=placed");
    }

    #[tokio::test]
    async fn test_home_page_lists_menu_and_cart() {
        let (state, app) = test_app();
        state
            .storefront()
            .add_to_cart(food_delivery_core::ProductIndex::new(2))
            .unwrap();

        let (status, body) = send(&app, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Pizza"));
        assert!(html.contains("Salad"));
        assert!(html.contains("$8.00"));
    }

    #[tokio::test]
    async fn test_home_page_order_notice() {
        let (_, app) = test_app();
        let (_, body) = send(
            &app,
            Request::get("/?order=empty").body(Body::empty()).unwrap(),
        )
        .await;
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Cart is empty!"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (_, app) = test_app();
        let (status, _) =
            send(&app, Request::get("/checkout").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
