//! Plain data types for every stored kind and the payloads used to create and replace them.
//!
//! The [`ActorEntity`](crate::framework::ActorEntity) impls live next to each actor
//! (`customer_actor`, `cart_actor`, ...); this module only holds data and field validation.

pub mod customer;
pub mod ids;
pub mod invoice;
pub mod invoice_item;
pub mod product;
pub mod shopping_cart;
pub mod user;

pub use customer::*;
pub use ids::*;
pub use invoice::*;
pub use invoice_item::*;
pub use product::*;
pub use shopping_cart::*;
pub use user::*;
