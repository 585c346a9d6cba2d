use super::context::AppState;
use super::error::ApiError;
use crate::user_actor::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/auth", post(issue_token))
}

fn auth_invalid() -> (StatusCode, Json<AuthResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(AuthResponse {
            message: "Auth Invalid",
            token: String::new(),
        }),
    )
}

/// Exchanges a username and password for the account's bearer token.
///
/// Unknown users, wrong passwords and malformed bodies all answer 404 "Auth Invalid".
/// Failures of the store itself are a 500.
#[instrument(skip_all)]
async fn issue_token(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Ok(Json(request)) = payload else {
        return Ok(auth_invalid());
    };

    match state
        .users
        .issue_or_reuse_token(&request.username, &request.password)
        .await
    {
        Ok(token) => Ok((
            StatusCode::OK,
            Json(AuthResponse {
                message: "OK",
                token,
            }),
        )),
        Err(e @ (AuthError::NotFound(_) | AuthError::InvalidCredentials)) => {
            info!(username = %request.username, error = %e, "Auth refused");
            Ok(auth_invalid())
        }
        Err(e) => Err(e.into()),
    }
}
