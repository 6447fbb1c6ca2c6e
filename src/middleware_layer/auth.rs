use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    services::auth::extract_session_token,
    state::AppState,
};

/// The message returned whenever the gate rejects a request.
pub const AUTH_REQUIRED: &str = "Authentication required";

/// A middleware that requires a valid session token.
///
/// On success the decoded `DemoUser` is inserted into the request
/// extensions for downstream handlers. A missing cookie and an invalid
/// token are rejected identically.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `cookies` - The request cookies.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let token = extract_session_token(&cookies).ok_or_else(|| {
        tracing::debug!("❌ No session cookie found");
        AppError::Authentication(AUTH_REQUIRED.to_string())
    })?;

    let user = state
        .sessions
        .verify(&token)
        .map_err(|_| AppError::Authentication(AUTH_REQUIRED.to_string()))?;

    tracing::debug!("✅ User authenticated: {}", user.id);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
