use tower_cookies::Cookies;

use crate::{
    error::{AppError, Result},
    models::user::DemoUser,
    state::AppState,
};

/// The name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Checks the submitted credentials and issues a session token.
///
/// # Returns
///
/// The authenticated user and their signed session token.
pub fn login(state: &AppState, email: &str, password: &str) -> Result<(DemoUser, String)> {
    let user = state.users.authenticate(email, password).ok_or_else(|| {
        tracing::debug!("Credential check failed for {}", email);
        AppError::Authentication("Invalid credentials".to_string())
    })?;

    let token = state.sessions.issue(&user).map_err(|e| {
        tracing::error!("❌ Session token issuance failed for {}: {}", user.id, e);
        AppError::Internal("Failed to create session token".to_string())
    })?;

    Ok((user, token))
}

/// Extracts the session token from the request cookies.
pub fn extract_session_token(cookies: &Cookies) -> Option<String> {
    cookies
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Resolves the caller's identity from the session cookie.
///
/// Returns `None` when the cookie is missing or its token does not verify.
pub fn current_user(state: &AppState, cookies: &Cookies) -> Option<DemoUser> {
    let token = extract_session_token(cookies)?;
    state.sessions.verify(&token).ok()
}
