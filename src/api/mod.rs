//! HTTP surface.
//!
//! | Route | Auth |
//! |---|---|
//! | `GET /health-check` | no |
//! | `POST /auth` | no |
//! | `GET, POST /{kind}` and `GET, PUT, DELETE /{kind}/{id}` for customers, products, invoices, invoiceitems, shoppingcarts | bearer token |
//! | `POST /update-shoppingcart` | bearer token |

mod auth;
mod context;
mod error;
mod extractors;
mod health;
mod middleware;
mod resource;
mod shopping_carts;
mod views;

pub use context::AppState;
pub use error::ApiError;
pub use views::{InvoiceItemView, InvoiceView};

use crate::model::{Customer, Invoice, InvoiceItem, Product, ShoppingCart};
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let protected = Router::new();
    let protected = resource::mount::<Customer>(protected);
    let protected = resource::mount::<Product>(protected);
    let protected = resource::mount::<Invoice>(protected);
    let protected = resource::mount::<InvoiceItem>(protected);
    let protected = resource::mount::<ShoppingCart>(protected)
        .route("/update-shoppingcart", post(shopping_carts::update_cart))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_token,
        ));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
