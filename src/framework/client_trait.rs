//! # ActorClient Trait
//!
//! Common interface for domain clients: the store operations are provided once, on top of the
//! generic `ResourceClient`, and each client only says how framework errors map onto its own
//! error type.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<ShoppingCart> for CartClient {
///     type Error = StoreError;
///
///     fn inner(&self) -> &ResourceClient<ShoppingCart> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         StoreError::from(e)
///     }
/// }
///
/// // create(), get(), fetch(), list(), replace() and delete() come for free
/// let cart = carts.fetch(ShoppingCartId(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Store a new row built from `params`.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: T::Create) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// Fetch a row by id, `None` when absent.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a row by id, mapping absence to the not-found error.
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.get(id.clone()).await? {
            Some(item) => Ok(item),
            None => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
        }
    }

    /// Every row of the kind, in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Overwrite the mutable fields of a row.
    #[tracing::instrument(skip(self))]
    async fn replace(&self, id: T::Id, params: T::Replace) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().replace(id, params).await.map_err(Self::map_error)
    }

    /// Delete a row by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
