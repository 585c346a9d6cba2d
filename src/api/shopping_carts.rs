//! `POST /update-shoppingcart`, the guarded partial update.

use super::context::AppState;
use super::error::ApiError;
use crate::model::{CartPatch, ShoppingCart, ShoppingCartId};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// The cart id plus any subset of the cart fields.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub id: u32,
    #[serde(flatten)]
    pub patch: CartPatch,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: CartBody,
}

/// The updated cart, or `{}` when the update was refused.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CartBody {
    Cart(ShoppingCart),
    Empty {},
}

pub async fn update_cart(
    State(state): State<AppState>,
    payload: Result<Json<UpdateCartRequest>, JsonRejection>,
) -> (StatusCode, Json<CartResponse>) {
    let result = match payload {
        Ok(Json(request)) => state
            .carts
            .update_cart(ShoppingCartId(request.id), request.patch)
            .await
            .map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    match result {
        Ok(cart) => (
            StatusCode::OK,
            Json(CartResponse {
                message: "OK".to_string(),
                cart: CartBody::Cart(cart),
            }),
        ),
        Err(e) => {
            e.report();
            (
                e.status(),
                Json(CartResponse {
                    message: e.to_string(),
                    cart: CartBody::Empty {},
                }),
            )
        }
    }
}
