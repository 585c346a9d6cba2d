//! Invoice line store.

pub mod entity;

use crate::clients::InvoiceItemClient;
use crate::framework::ResourceActor;
use crate::model::InvoiceItem;

/// Creates a new InvoiceItem actor and its client.
///
/// Run it with `(InvoiceClient, ProductClient)` as context.
pub fn new(buffer_size: usize) -> (ResourceActor<InvoiceItem>, InvoiceItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InvoiceItemClient::new(generic_client))
}
