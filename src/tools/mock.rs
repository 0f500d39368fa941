//! Mock Tool Implementation
//!
//! The single tool this server simulates. It has no behavior beyond echoing
//! the caller's query inside a fixed sentence, which is exactly what makes it
//! useful as a stand-in backend: clients can assert on a response they fully
//! control.

/// Tool identifier reported in every response envelope.
pub const NAME: &str = "mock-mcp";

/// Render the echo line for a query.
///
/// The query text is interpolated verbatim; the surrounding single quotes are
/// part of the fixed sentence, not escaping. Callers that send quotes or
/// newlines get them back unchanged.
pub fn run(query: &str) -> String {
    format!("MockMCP received your query: '{}'", query)
}
