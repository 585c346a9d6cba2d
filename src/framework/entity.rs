//! # ActorEntity Trait
//!
//! The contract every stored kind implements to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). It names the payload types for create and
//! replace, the custom actions a kind supports, the context injected at run time, and the error
//! type its hooks return.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can consult other actors (for example to check that a referenced
/// customer exists). The `Context` type carries those dependencies and is handed to `run()`
/// rather than `new()`, so actors can be created before they are wired together.
///
/// # Atomic hooks
/// `on_replace` and `handle_action` run against a copy of the stored row. The copy is written
/// back only when the hook returns `Ok`, so a refused request never leaves a half-applied row.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Generated from a per-actor `u32` counter.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new row.
    type Create: Send + Sync + Debug;

    /// Payload that fully replaces the mutable fields of a row.
    type Replace: Send + Sync + Debug;

    /// Kind-specific operations beyond the store operations.
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error type returned by the hooks.
    ///
    /// One error enum per kind rather than one per operation; clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the row from its store-assigned id and creation timestamp and the caller payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(
        id: Self::Id,
        created_at: DateTime<Utc>,
        params: Self::Create,
    ) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the row is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Overwrite the mutable fields. Must leave the id and creation timestamp untouched.
    async fn on_replace(
        &mut self,
        params: Self::Replace,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the row is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a kind-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
