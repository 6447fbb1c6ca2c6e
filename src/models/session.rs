use serde::{Deserialize, Serialize};

use crate::models::user::{DemoUser, UserGroup};

/// The claims carried by a session token.
///
/// The server keeps no session table: these claims are the whole session.
/// `isAutoJoinAdmin`, `role`, `groups` and `iat` default when absent so tokens
/// minted before those fields existed still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// The ID of the user this session belongs to.
    pub user_id: String,
    /// The user's email address.
    pub email: String,
    /// Administrative-capability flag.
    #[serde(default)]
    pub is_auto_join_admin: bool,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub groups: Vec<UserGroup>,
    /// Issued-at, unix seconds.
    #[serde(default)]
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

impl SessionClaims {
    /// Builds the claims for `user`, valid from `issued_at` until `expires_at`.
    pub fn for_user(user: &DemoUser, issued_at: i64, expires_at: i64) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            is_auto_join_admin: user.is_auto_join_admin,
            role: user.role.clone(),
            groups: user.groups.clone(),
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// Reconstructs the identity carried by these claims.
    pub fn into_user(self) -> DemoUser {
        DemoUser {
            id: self.user_id,
            email: self.email,
            is_auto_join_admin: self.is_auto_join_admin,
            role: self.role,
            groups: self.groups,
        }
    }
}
