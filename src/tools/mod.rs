//! Tools Module
//!
//! Tool behavior simulated by this server. The transport layer in
//! `core::server` stays free of tool specifics; it only knows how to call
//! into a tool module for a name and an output line.

pub mod mock;
