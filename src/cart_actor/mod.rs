//! Shopping cart store and the closed-cart guard.
//!
//! A cart whose `is_closed` flag is set refuses every further write, whether it arrives as a
//! full replace or as a [`CartAction::Update`]. The check and the write happen inside one
//! actor turn, so two concurrent updates of a cart that is about to close cannot both pass.

mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::ShoppingCart;

/// Creates a new ShoppingCart actor and its client.
///
/// Run it with `(CustomerClient, ProductClient)` as context.
pub fn new(buffer_size: usize) -> (ResourceActor<ShoppingCart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
