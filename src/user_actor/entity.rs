//! [`ActorEntity`] implementation for [`User`].
//!
//! Accounts are never replaced; the only mutation is storing the first issued token.

use super::actions::UserAction;
use super::error::AuthError;
use super::password::generate_token;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Replace = Infallible;
    type Action = UserAction;
    type ActionResult = String;
    type Context = ();
    type Error = AuthError;

    fn from_create_params(
        id: UserId,
        created_at: DateTime<Utc>,
        params: UserCreate,
    ) -> Result<Self, AuthError> {
        Ok(Self::new(id, created_at, params))
    }

    async fn on_replace(&mut self, params: Infallible, _ctx: &()) -> Result<(), AuthError> {
        match params {}
    }

    /// Handles custom actions for the User entity.
    ///
    /// # Actions
    /// - `IssueToken`: returns the stored token, or mints and stores one if there is none yet
    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<String, AuthError> {
        match action {
            UserAction::IssueToken => {
                let token = self.token.get_or_insert_with(generate_token);
                Ok(token.clone())
            }
        }
    }
}
