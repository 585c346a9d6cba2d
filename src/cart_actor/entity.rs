//! [`ActorEntity`] implementation for [`ShoppingCart`].

use super::actions::CartAction;
use crate::clients::{CustomerClient, ProductClient};
use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{CartFields, CustomerId, ProductId, ShoppingCart, ShoppingCartId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

async fn check_references(
    (customers, products): &(CustomerClient, ProductClient),
    customer_id: Option<CustomerId>,
    product_id: Option<ProductId>,
) -> Result<(), StoreError> {
    if let Some(customer_id) = customer_id {
        customers.ensure_exists(customer_id).await?;
    }
    if let Some(product_id) = product_id {
        products.ensure_exists(product_id).await?;
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for ShoppingCart {
    type Id = ShoppingCartId;
    type Create = CartFields;
    type Replace = CartFields;
    type Action = CartAction;
    type ActionResult = ShoppingCart;
    type Context = (CustomerClient, ProductClient);
    type Error = StoreError;

    fn from_create_params(
        id: ShoppingCartId,
        created_at: DateTime<Utc>,
        params: CartFields,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(id, created_at, params))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), StoreError> {
        check_references(ctx, Some(self.customer_id), Some(self.product_id)).await
    }

    /// Full replace, refused once the cart is closed.
    async fn on_replace(&mut self, params: CartFields, ctx: &Self::Context) -> Result<(), StoreError> {
        self.ensure_open()?;
        check_references(ctx, Some(params.customer_id), Some(params.product_id)).await?;
        self.apply(params, Utc::now());
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &Self::Context,
    ) -> Result<ShoppingCart, StoreError> {
        match action {
            CartAction::Update(patch) => {
                self.ensure_open()?;
                check_references(ctx, patch.customer_id, patch.product_id).await?;
                self.apply_patch(patch, Utc::now());
                if self.is_closed {
                    info!(id = %self.id, "Cart closed");
                }
                Ok(self.clone())
            }
        }
    }
}
