//! # vlicense — vSphere license client
//!
//! Session-authenticated client for the vCenter / ESXi REST surface,
//! scoped to what the `vlicense` CLI consumes: login / logout, endpoint
//! identity, and the installed-license collection.
//!
//! ## Modules
//!
//! - **types** — connection config and wire types
//! - **error** — categorised error type
//! - **client** — REST client with session-based auth
//! - **license** — license manager (installed-license collection)
//! - **session** — connect / disconnect facade

pub mod types;
pub mod error;
pub mod client;
pub mod license;
pub mod session;
