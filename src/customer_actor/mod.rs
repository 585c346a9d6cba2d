//! Customer store.

pub mod entity;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
