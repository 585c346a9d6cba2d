//! [`ActorEntity`] implementation for [`InvoiceItem`].

use crate::clients::{InvoiceClient, ProductClient};
use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{InvoiceId, InvoiceItem, InvoiceItemFields, InvoiceItemId, ProductId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

async fn check_references(
    (invoices, products): &(InvoiceClient, ProductClient),
    invoice_id: InvoiceId,
    product_id: ProductId,
) -> Result<(), StoreError> {
    invoices.ensure_exists(invoice_id).await?;
    products.ensure_exists(product_id).await
}

#[async_trait]
impl ActorEntity for InvoiceItem {
    type Id = InvoiceItemId;
    type Create = InvoiceItemFields;
    type Replace = InvoiceItemFields;
    type Action = ();
    type ActionResult = ();
    type Context = (InvoiceClient, ProductClient);
    type Error = StoreError;

    fn from_create_params(
        id: InvoiceItemId,
        created_at: DateTime<Utc>,
        params: InvoiceItemFields,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(id, created_at, params))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), StoreError> {
        check_references(ctx, self.invoice_id, self.product_id).await
    }

    async fn on_replace(
        &mut self,
        params: InvoiceItemFields,
        ctx: &Self::Context,
    ) -> Result<(), StoreError> {
        check_references(ctx, params.invoice_id, params.product_id).await?;
        self.apply(params);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), StoreError> {
        Ok(())
    }
}
