//! Mock MCP backend for client integration testing.
//!
//! Serves a single `POST /invoke` endpoint that wraps the caller's query
//! text in a fixed JSON envelope:
//!
//! ```json
//! { "tool": "mock-mcp", "output": "MockMCP received your query: '<query>'" }
//! ```
//!
//! Usable as the `mock-mcp-server` binary or as a library, so test suites
//! can spin up independent instances on ephemeral ports and tear them down
//! when done.

pub mod core;
pub mod tools;
