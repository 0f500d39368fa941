//! Mock MCP Server Entry Point
//!
//! Binds the loopback listener, prints the startup banner, and serves the
//! invoke endpoint until the process is terminated.
//!
//! Environment Variables:
//! - HOST: Bind address (default: "127.0.0.1")
//! - PORT: Port number (default: 8000)

use std::env;

use mock_mcp_server::core::server::MockMcpServer;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Logs go to stderr so stdout carries nothing but the banner. Access
    // logs from the Actix Logger middleware arrive through the log bridge.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or(8000);

    let server = MockMcpServer::bind(&host, port)?;

    println!("🚀 Mock MCP running at http://{}", server.local_addr());
    tracing::info!("serving POST /invoke on {}", server.local_addr());

    server.run().await
}
