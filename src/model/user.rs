use crate::model::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

/// An API account. Never serialized; the HTTP layer only ever sees the token.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// PHC string produced by argon2.
    pub password_hash: String,
    /// Issued on first successful login, then reused.
    pub token: Option<String>,
    pub creation_date: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

/// Payload for storing a new account. The password is hashed before it reaches the actor.
#[derive(Clone)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl User {
    pub fn new(id: UserId, creation_date: DateTime<Utc>, params: UserCreate) -> Self {
        Self {
            id,
            username: params.username,
            password_hash: params.password_hash,
            token: None,
            creation_date,
        }
    }
}
