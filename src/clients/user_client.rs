use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{User, UserCreate};
use crate::user_actor::password::{hash_password, tokens_match, verify_password};
use crate::user_actor::{AuthError, UserAction};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Client for the User actor: account registration and the token authenticator.
///
/// Clones share one registration lock, so the username check and the insert of one
/// `register` call never interleave with another's.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    registration: Arc<Mutex<()>>,
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = AuthError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AuthError::from(e)
    }
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self {
            inner,
            registration: Arc::new(Mutex::new(())),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// Stores a new account with an argon2 hash of `password`.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let _guard = self.registration.lock().await;
        if self.find_by_username(username).await?.is_some() {
            return Err(AuthError::Validation(format!(
                "username {username} is already taken"
            )));
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        let user = self
            .create(UserCreate {
                username: username.to_string(),
                password_hash,
            })
            .await?;
        info!(id = %user.id, "Registered");
        Ok(user)
    }

    /// Checks the credentials and returns the account's token, minting one on first login.
    ///
    /// Repeated calls with the right password return the same token.
    ///
    /// # Errors
    /// - [`AuthError::NotFound`] for an unknown username
    /// - [`AuthError::InvalidCredentials`] for a wrong password
    #[instrument(skip(self, password))]
    pub async fn issue_or_reuse_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        debug!("Sending request");
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::NotFound(username.to_string()))?;

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.inner
            .perform_action(user.id, UserAction::IssueToken)
            .await
            .map_err(Self::map_error)
    }

    /// Resolves a bearer token to its account.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        self.list()
            .await?
            .into_iter()
            .find(|user| {
                user.token
                    .as_deref()
                    .is_some_and(|stored| tokens_match(stored, token))
            })
            .ok_or(AuthError::InvalidToken)
    }
}
