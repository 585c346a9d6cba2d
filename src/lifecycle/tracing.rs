//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. Log lines use a
//! compact format without module paths (`with_target(false)`); actors tag every line with an
//! `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Store Operations**: Create, Get, List, Replace, Delete and custom Actions
//! - **HTTP Requests**: one span per request from `tower-http`, with the authenticated user
//! - **Errors**: refused writes with the entity id and reason
//!
//! ## Usage
//!
//! ```bash
//! # Default level is info
//! cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actors
//! RUST_LOG=shop_backoffice::framework=debug cargo run
//! ```
//!
//! A closed-cart refusal with `RUST_LOG=debug` looks like:
//!
//! ```text
//! DEBUG request:update_cart: Sending request id=ShoppingCartId(1)
//! DEBUG Action entity_type="ShoppingCart" id=shopping cart 1 action=Update(CartPatch { .. })
//! WARN  Action failed entity_type="ShoppingCart" id=shopping cart 1 error=Error! Cart already closed!
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Reads `RUST_LOG`, falling back to `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
