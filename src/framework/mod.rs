//! Generic resource framework.
//!
//! Every entity kind in the shop (customers, products, invoices, invoice items, shopping carts
//! and back-office users) is stored by its own [`ResourceActor`]. The actor owns the rows of
//! that kind and processes requests one at a time, so a read-check-write inside a hook is atomic
//! with respect to every other request for the same kind.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that entity types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the rows of one entity kind
//! - [`ResourceClient`] - Type-safe handle used to send requests to an actor
//! - [`ActorClient`] - Trait giving domain clients the standard store operations
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients and actors without spawning their dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
