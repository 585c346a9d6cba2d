//! [`ActorEntity`] implementation for [`Customer`]. No dependencies, no custom actions.

use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerFields, CustomerId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerFields;
    type Replace = CustomerFields;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = StoreError;

    fn from_create_params(
        id: CustomerId,
        created_at: DateTime<Utc>,
        params: CustomerFields,
    ) -> Result<Self, StoreError> {
        params.validate()?;
        Ok(Self::new(id, created_at, params))
    }

    async fn on_replace(&mut self, params: CustomerFields, _ctx: &()) -> Result<(), StoreError> {
        params.validate()?;
        self.apply(params);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), StoreError> {
        Ok(())
    }
}
