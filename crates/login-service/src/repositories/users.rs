//! Login user directory.
//!
//! Credentials are fixed at startup; passwords are stored as bcrypt hashes
//! (cost 12) and never leave this module.

use crate::models::UserInfo;
use std::fmt;

/// A user able to log in.
#[derive(Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("password_hash", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Read-only set of login users.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

const SEED_USERS: &[(i64, &str, &str, &str, &str)] = &[
    (
        1,
        "admin",
        "admin@example.com",
        "admin",
        // admin123
        "$2b$12$lKIDuoT3XiGLW6zMUvgvE.LfVzrIeXHs2A0o2tefcyUTF9obtyegK",
    ),
    (
        2,
        "user1",
        "user1@example.com",
        "user",
        // password123
        "$2b$12$hToQLXo54xGfJOYd5EtRKOi8BT.sAXfg5UNmKyKGiwEmKqSIt47y6",
    ),
    (
        3,
        "user2",
        "user2@example.com",
        "user",
        // password456
        "$2b$12$CSCzGo8zJHO0lvJSIEqopeFuRvQVWAnIBZnPG4OigTqs8qVhFXc2u",
    ),
];

impl UserDirectory {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The three seeded demo accounts.
    #[must_use]
    pub fn seeded() -> Self {
        let users = SEED_USERS
            .iter()
            .map(|&(id, username, email, role, password_hash)| User {
                id,
                username: username.to_string(),
                email: email.to_string(),
                role: role.to_string(),
                password_hash: password_hash.to_string(),
            })
            .collect();
        Self::new(users)
    }

    #[must_use]
    pub fn get_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
