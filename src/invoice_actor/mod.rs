//! Invoice store. Each invoice references a customer that must exist when it is written.

pub mod entity;

use crate::clients::InvoiceClient;
use crate::framework::ResourceActor;
use crate::model::Invoice;

/// Creates a new Invoice actor and its client.
///
/// The actor's context is the [`CustomerClient`](crate::clients::CustomerClient) used to check
/// `customer_id`; pass it to `run()`.
pub fn new(buffer_size: usize) -> (ResourceActor<Invoice>, InvoiceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InvoiceClient::new(generic_client))
}
