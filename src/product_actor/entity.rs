//! [`ActorEntity`] implementation for [`Product`].
//!
//! Prices are stored as given; there is no stock tracking.

use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Replace = ProductFields;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = StoreError;

    fn from_create_params(
        id: ProductId,
        created_at: DateTime<Utc>,
        params: ProductFields,
    ) -> Result<Self, StoreError> {
        params.validate()?;
        Ok(Self::new(id, created_at, params))
    }

    async fn on_replace(&mut self, params: ProductFields, _ctx: &()) -> Result<(), StoreError> {
        params.validate()?;
        self.apply(params);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), StoreError> {
        Ok(())
    }
}
