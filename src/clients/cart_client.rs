use crate::cart_actor::CartAction;
use crate::error::StoreError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CartPatch, ShoppingCart, ShoppingCartId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the ShoppingCart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<ShoppingCart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<ShoppingCart>) -> Self {
        Self { inner }
    }

    /// Guarded partial update.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] when there is no such cart
    /// - [`StoreError::CartClosed`] when the cart is already closed; nothing is written
    /// - [`StoreError::MissingReference`] when the patch points at a missing customer or product
    #[instrument(skip(self))]
    pub async fn update_cart(
        &self,
        id: ShoppingCartId,
        patch: CartPatch,
    ) -> Result<ShoppingCart, StoreError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CartAction::Update(patch))
            .await
            .map_err(Self::map_error)
    }

    /// Closes an open cart.
    pub async fn close_cart(&self, id: ShoppingCartId) -> Result<ShoppingCart, StoreError> {
        self.update_cart(id, CartPatch::close()).await
    }
}

#[async_trait]
impl ActorClient<ShoppingCart> for CartClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<ShoppingCart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::model::{CustomerId, ProductId};
    use chrono::Utc;

    fn cart(is_closed: bool) -> ShoppingCart {
        let now = Utc::now();
        ShoppingCart {
            id: ShoppingCartId(5),
            customer_id: CustomerId(1),
            product_id: ProductId(2),
            quantity: 1,
            discount_value: 0.0,
            is_closed,
            creation_date: now,
            closed_date: now,
        }
    }

    #[tokio::test]
    async fn test_close_cart_sends_a_closing_patch() {
        let (inner, mut receiver) = create_mock_client::<ShoppingCart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.close_cart(ShoppingCartId(5)).await });

        let (id, action, respond_to) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ShoppingCartId(5));
        let CartAction::Update(patch) = action;
        assert_eq!(patch, CartPatch::close());
        respond_to.send(Ok(cart(true))).unwrap();

        let closed = task.await.unwrap().unwrap();
        assert!(closed.is_closed);
    }

    #[tokio::test]
    async fn test_cart_closed_error_survives_the_actor_boundary() {
        let (inner, mut receiver) = create_mock_client::<ShoppingCart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .update_cart(
                    ShoppingCartId(5),
                    CartPatch {
                        quantity: Some(3),
                        ..CartPatch::default()
                    },
                )
                .await
        });

        let (_, _, respond_to) = expect_action(&mut receiver).await.unwrap();
        respond_to
            .send(Err(FrameworkError::EntityError(Box::new(
                StoreError::CartClosed(ShoppingCartId(5)),
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(StoreError::CartClosed(ShoppingCartId(5))));
    }
}
