//! Monastery content API server library.
//!
//! Exposes the building blocks (config, state, error handling, sessions,
//! routes) so integration tests and the binary entrypoints can both use
//! them.

pub mod background;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
