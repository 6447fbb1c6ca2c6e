use serde::{Deserialize, Serialize};

use crate::models::user::DemoUser;

/// The admin scope granted to auto-join administrators.
pub const AUTOJOIN_SCOPE: &str = "autojoin";

/// The user a Vortex token is minted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VortexUser {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub admin_scopes: Vec<String>,
}

impl From<&DemoUser> for VortexUser {
    fn from(user: &DemoUser) -> Self {
        let admin_scopes = if user.is_auto_join_admin {
            vec![AUTOJOIN_SCOPE.to_string()]
        } else {
            Vec::new()
        };

        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            admin_scopes,
        }
    }
}

/// Who an invitation was sent to, e.g. `{"type": "email", "value": "a@b.c"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationTarget {
    #[serde(rename = "type")]
    pub target_type: String,
    pub value: String,
}

/// The request payload for accepting invitations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationsRequest {
    pub invitation_ids: Vec<String>,
    pub target: InvitationTarget,
}
