use axum::{
    extract::State,
    Extension,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::{models::user::DemoUser, state::AppState};

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<DemoUser>,
}

#[derive(Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: DemoUser,
    pub timestamp: String,
}

/// Lists the demo accounts, without password hashes.
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.users.public_users(),
    })
}

/// A route that only answers callers who passed the session gate.
pub async fn protected(Extension(user): Extension<DemoUser>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This is a protected route!".to_string(),
        user,
        timestamp: Utc::now().to_rfc3339(),
    })
}
