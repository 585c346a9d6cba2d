//! # Framework Errors
//!
//! Errors raised by the actor plumbing. Entity hook errors travel inside
//! [`FrameworkError::EntityError`] and are recovered by the clients with a downcast.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{0} not found")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
