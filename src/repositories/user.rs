use crate::{
    crypto::password::{hash_password, verify_password},
    models::user::{DemoUser, UserGroup, UserRecord},
};

/// A fixed, read-only set of users.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    /// Creates a directory from already-hashed records.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The two demo accounts.
    pub fn demo() -> Self {
        Self::new(vec![
            UserRecord {
                id: "user-1".to_string(),
                email: "admin@example.com".to_string(),
                password_hash: hash_password("password123"),
                is_auto_join_admin: true,
                role: "admin".to_string(),
                groups: vec![
                    UserGroup::new("team", "team-1", "Engineering"),
                    UserGroup::new("organization", "org-1", "Acme Corp"),
                ],
            },
            UserRecord {
                id: "user-2".to_string(),
                email: "user@example.com".to_string(),
                password_hash: hash_password("userpass"),
                is_auto_join_admin: false,
                role: "user".to_string(),
                groups: vec![UserGroup::new("team", "team-1", "Engineering")],
            },
        ])
    }

    /// Finds a user by their email address. Exact, case-sensitive match.
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Checks an email/password pair.
    ///
    /// Returns `None` for an unknown email and for a wrong password alike.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<DemoUser> {
        self.find_by_email(email)
            .filter(|user| verify_password(password, &user.password_hash))
            .map(UserRecord::identity)
    }

    /// Every user's public identity, in directory order.
    pub fn public_users(&self) -> Vec<DemoUser> {
        self.users.iter().map(UserRecord::identity).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_authenticate() {
        let directory = UserDirectory::demo();

        let admin = directory
            .authenticate("admin@example.com", "password123")
            .unwrap();
        assert_eq!(admin.id, "user-1");
        assert!(admin.is_auto_join_admin);
        assert_eq!(admin.role, "admin");
        assert_eq!(admin.groups.len(), 2);

        let user = directory.authenticate("user@example.com", "userpass").unwrap();
        assert_eq!(user.id, "user-2");
        assert!(!user.is_auto_join_admin);
    }

    #[test]
    fn wrong_pairs_do_not_match() {
        let directory = UserDirectory::demo();

        assert!(directory.authenticate("user@example.com", "wrongpassword").is_none());
        assert!(directory.authenticate("admin@example.com", "userpass").is_none());
        assert!(directory.authenticate("nobody@example.com", "password123").is_none());
        assert!(directory.authenticate("ADMIN@example.com", "password123").is_none());
        assert!(directory.authenticate("", "").is_none());
    }

    #[test]
    fn custom_directory_is_isolated() {
        let directory = UserDirectory::new(vec![UserRecord {
            id: "u".to_string(),
            email: "solo@example.com".to_string(),
            password_hash: hash_password("secret"),
            is_auto_join_admin: false,
            role: String::new(),
            groups: Vec::new(),
        }]);

        assert_eq!(directory.len(), 1);
        assert!(directory.authenticate("solo@example.com", "secret").is_some());
        assert!(directory.authenticate("admin@example.com", "password123").is_none());
    }

    #[test]
    fn public_listing_has_no_hashes() {
        let users = UserDirectory::demo().public_users();
        assert_eq!(users.len(), 2);

        let json = serde_json::to_string(&users).unwrap();
        assert!(!json.contains(&hash_password("password123")));
        assert!(json.contains("\"isAutoJoinAdmin\":true"));
    }
}
