use serde::{Deserialize, Serialize};

/// A group membership. Legacy: carried in tokens for older clients, never
/// used for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// The kind of group, e.g. `team` or `organization`.
    #[serde(rename = "type")]
    pub group_type: String,
    /// The group's identifier.
    pub id: String,
    /// The group's display name.
    pub name: String,
}

impl UserGroup {
    pub fn new(group_type: &str, id: &str, name: &str) -> Self {
        Self {
            group_type: group_type.to_string(),
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// A stored user, including the password digest.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// The unique identifier for the user.
    pub id: String,
    /// The user's email address. Unique within a directory.
    pub email: String,
    /// Lowercase hex SHA-256 of the user's password.
    pub password_hash: String,
    /// Whether the user may request Vortex tokens with the `autojoin` admin scope.
    pub is_auto_join_admin: bool,
    /// Legacy role label.
    pub role: String,
    /// Legacy group memberships.
    pub groups: Vec<UserGroup>,
}

impl UserRecord {
    /// The public identity of this record.
    pub fn identity(&self) -> DemoUser {
        DemoUser {
            id: self.id.clone(),
            email: self.email.clone(),
            is_auto_join_admin: self.is_auto_join_admin,
            role: self.role.clone(),
            groups: self.groups.clone(),
        }
    }
}

/// The public identity of a user, as returned by the API and carried in
/// session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub is_auto_join_admin: bool,
    pub role: String,
    pub groups: Vec<UserGroup>,
}
