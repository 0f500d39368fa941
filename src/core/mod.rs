//! Core server module
//!
//! - server.rs: invoke handler and HTTP server lifecycle
//! - error.rs: typed errors surfaced at the invoke boundary

pub mod error;
pub mod server;
