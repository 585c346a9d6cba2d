use super::context::AppState;
use super::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info_span, Instrument};

/// Auth gate for the protected routes.
///
/// Accepts `Authorization: Bearer <token>` and `Authorization: Token <token>`, and runs the rest
/// of the request inside a span naming the authenticated user.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned)
        .ok_or(ApiError::AuthenticationRequired)?;

    let user = state.users.authenticate(&token).await?;
    let span = info_span!("request", user = %user.username);
    Ok(next.run(request).instrument(span).await)
}

/// Extracts the credential from an `Authorization` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    let known_scheme =
        scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token");
    (known_scheme && !token.is_empty()).then_some(token)
}
