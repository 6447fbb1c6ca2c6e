use axum::{
    extract::{Path, Query, State, rejection::JsonRejection},
    Extension,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    handlers::auth::SuccessResponse,
    models::{
        invitation::{AcceptInvitationsRequest, VortexUser},
        user::DemoUser,
    },
    services::vortex::VortexError,
    state::AppState,
    validation::auth::validate_target,
};

/// The query parameters for listing invitations by target.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetQuery {
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub target_value: String,
}

#[derive(Serialize)]
pub struct JwtResponse {
    pub jwt: String,
}

#[derive(Serialize)]
pub struct InvitationsResponse {
    pub invitations: Vec<Value>,
}

/// Logs the collaborator failure and maps it to the generic `message`.
fn upstream(message: &'static str) -> impl FnOnce(VortexError) -> AppError {
    move |e| {
        tracing::error!("❌ {}: {}", message, e);
        AppError::Upstream(message.to_string())
    }
}

/// Mints a Vortex token for the authenticated user. Auto-join admins get
/// the `autojoin` admin scope.
pub async fn generate_jwt(
    State(state): State<AppState>,
    Extension(user): Extension<DemoUser>,
) -> Result<Json<JwtResponse>> {
    let vortex_user = VortexUser::from(&user);
    let jwt = state
        .invitations
        .generate_jwt(&vortex_user)
        .map_err(upstream("Failed to generate JWT"))?;

    tracing::info!("🎟️ Vortex JWT generated for {}", user.id);

    Ok(Json(JwtResponse { jwt }))
}

pub async fn get_invitations(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> Result<Json<InvitationsResponse>> {
    validate_target(&query.target_type, &query.target_value)?;

    let invitations = state
        .invitations
        .invitations_by_target(&query.target_type, &query.target_value)
        .await
        .map_err(upstream("Failed to get invitations"))?;

    Ok(Json(InvitationsResponse { invitations }))
}

pub async fn get_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state
        .invitations
        .invitation(&id)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::debug!("Invitation {} lookup failed: {}", id, e);
            AppError::NotFound("Invitation not found".to_string())
        })
}

pub async fn revoke_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    state
        .invitations
        .revoke_invitation(&id)
        .await
        .map_err(upstream("Failed to revoke invitation"))?;

    tracing::info!("🗑️ Invitation revoked: {}", id);

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn accept_invitations(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AcceptInvitationsRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload
        .ok()
        .filter(|Json(req)| !req.invitation_ids.is_empty())
        .ok_or_else(|| AppError::Validation("Invalid request body".to_string()))?;

    let result = state
        .invitations
        .accept_invitations(&payload.invitation_ids, &payload.target)
        .await
        .map_err(upstream("Failed to accept invitations"))?;

    Ok(Json(result))
}

pub async fn get_invitations_by_group(
    State(state): State<AppState>,
    Path((group_type, group_id)): Path<(String, String)>,
) -> Result<Json<InvitationsResponse>> {
    let invitations = state
        .invitations
        .invitations_by_group(&group_type, &group_id)
        .await
        .map_err(upstream("Failed to get group invitations"))?;

    Ok(Json(InvitationsResponse { invitations }))
}

pub async fn delete_invitations_by_group(
    State(state): State<AppState>,
    Path((group_type, group_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>> {
    state
        .invitations
        .delete_invitations_by_group(&group_type, &group_id)
        .await
        .map_err(upstream("Failed to delete group invitations"))?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn reinvite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let result = state
        .invitations
        .reinvite(&id)
        .await
        .map_err(upstream("Failed to reinvite"))?;

    Ok(Json(result))
}
