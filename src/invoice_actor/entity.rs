//! [`ActorEntity`] implementation for [`Invoice`].
//!
//! Create and replace both check that the referenced customer exists. Deleting that customer
//! later leaves the invoice in place.

use crate::clients::CustomerClient;
use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{Invoice, InvoiceFields, InvoiceId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl ActorEntity for Invoice {
    type Id = InvoiceId;
    type Create = InvoiceFields;
    type Replace = InvoiceFields;
    type Action = ();
    type ActionResult = ();
    type Context = CustomerClient;
    type Error = StoreError;

    fn from_create_params(
        id: InvoiceId,
        created_at: DateTime<Utc>,
        params: InvoiceFields,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(id, created_at, params))
    }

    async fn on_create(&mut self, customers: &CustomerClient) -> Result<(), StoreError> {
        customers.ensure_exists(self.customer_id).await
    }

    async fn on_replace(
        &mut self,
        params: InvoiceFields,
        customers: &CustomerClient,
    ) -> Result<(), StoreError> {
        customers.ensure_exists(params.customer_id).await?;
        self.apply(params);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &CustomerClient) -> Result<(), StoreError> {
        Ok(())
    }
}
