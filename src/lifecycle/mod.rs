//! Runtime orchestration and lifecycle management.
//!
//! - [`ShopSystem`] - starts every actor, wires their dependencies and shuts them down
//! - [`Config`] - settings read from the environment at startup
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::*;
