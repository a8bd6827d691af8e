//! `taskdock` HTTP API library.
//!
//! Exposes the router, handlers and server startup for use in tests
//! and embedding. The server maps seven routes onto the six document
//! collection operations in [`taskdock_store`].

pub mod config;
pub mod handlers;
pub mod server;
