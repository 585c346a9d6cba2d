//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod cart_client;
pub mod catalog_client;
pub mod user_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use user_client::*;
