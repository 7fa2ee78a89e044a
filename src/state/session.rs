//! Session state
//!
//! Represents who is currently logged in. The user profile and the backend
//! token travel together: there is no reachable state where one is set
//! without the other.

use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// In-memory authentication state
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Enter the logged-in state, setting user and token together
    pub fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Leave the logged-in state. Safe to call when already logged out.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Replace the user profile, keeping the token. Ignored when logged out.
    pub fn replace_user(&mut self, user: User) {
        if self.token.is_some() {
            self.user = Some(user);
        }
    }

    /// Persistable form of the session, when authenticated
    pub fn to_record(&self) -> Option<SessionRecord> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some(SessionRecord {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }

    /// Rebuild the in-memory state from a persisted record
    pub fn restore(record: SessionRecord) -> Self {
        Self {
            user: Some(record.user),
            token: Some(record.token),
        }
    }
}

/// Persisted form of an authenticated session. Token and user are stored
/// as one record so a restart restores both or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub user: User,
}
