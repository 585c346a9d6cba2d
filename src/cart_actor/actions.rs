//! Custom actions for the ShoppingCart actor.

use crate::model::CartPatch;

/// Custom actions for ShoppingCart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Guarded partial update. Refused with
    /// [`StoreError::CartClosed`](crate::error::StoreError::CartClosed) when the cart is closed;
    /// returns the updated cart otherwise.
    Update(CartPatch),
}
