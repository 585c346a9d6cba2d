//! # Shop Back Office
//!
//! A small e-commerce back office: customers, products, invoices, invoice items and shopping
//! carts, exposed as CRUD endpoints behind token authentication.
//!
//! ## Architecture
//!
//! Every entity kind lives in its own actor. A [`ResourceActor`](framework::ResourceActor) owns
//! the rows of one kind and handles requests one at a time, so rules that read and then write a
//! row (the closed-cart guard, token issuing) need no locks.
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the [`ActorEntity`](framework::ActorEntity) hooks and the
//! [`MockClient`](framework::mock::MockClient) used in tests.
//!
//! ### 2. The Data ([`model`])
//! Plain structs for each kind, their create/replace payloads and field validation.
//!
//! ### 3. The Implementations ([`customer_actor`], [`product_actor`], [`invoice_actor`],
//! [`invoice_item_actor`], [`cart_actor`], [`user_actor`])
//! `ActorEntity` impls. Kinds that reference others get the parents' clients as context and check
//! that referenced rows exist on every write.
//!
//! ### 4. The Interface ([`clients`])
//! Typed wrappers over the generic client. [`CartClient`](clients::CartClient) adds the guarded
//! cart update; [`UserClient`](clients::UserClient) is the token authenticator.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) starts and wires the actors; configuration and tracing
//! setup live here too.
//!
//! ### 6. HTTP ([`api`])
//! axum router, auth gate, generic CRUD handlers and response shaping.

pub mod api;
pub mod cart_actor;
pub mod clients;
pub mod customer_actor;
pub mod error;
pub mod framework;
pub mod invoice_actor;
pub mod invoice_item_actor;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
