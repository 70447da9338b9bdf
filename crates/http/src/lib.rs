//! HTTP plumbing for the todo client
//!
//! Wire types for the todo API and the identity provider, plus typed clients
//! for both behind the `client` feature.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
