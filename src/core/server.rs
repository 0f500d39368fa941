//! Mock MCP server implementation
//!
//! This module contains the whole of the mock backend:
//! - Request/response envelope structures for the invoke endpoint
//! - The `POST /invoke` handler
//! - HTTP server setup with Actix Web and an explicit bind/run/stop lifecycle

use std::net::SocketAddr;

use actix_web::dev::{Server, ServerHandle};
use actix_web::middleware::{Compress, Logger};
use actix_web::{App, HttpResponse, HttpServer, web};
use serde::{Deserialize, Serialize};

use crate::core::error::InvokeError;
use crate::tools;

/// Request envelope for the invoke endpoint.
///
/// The body must be a JSON object. The `query` field is optional and defaults
/// to the empty string when absent; unknown fields are ignored.
#[derive(Deserialize, Debug)]
pub struct InvokeRequest {
    /// Query text to echo back. Absent means empty.
    #[serde(default)]
    pub query: String,
}

/// Response envelope returned by the invoke endpoint.
///
/// Built fresh for every request and discarded once the response bytes are
/// written; no state survives between invocations.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct InvokeResponse {
    /// Identifier of the mock tool that produced the output.
    pub tool: String,
    /// Echo line derived from the request's query text.
    pub output: String,
}

/// Handler for `POST /invoke`.
///
/// Reads the request body, parses it as a JSON object, and returns the fixed
/// mock envelope with the query text interpolated. A body that does not parse
/// into [`InvokeRequest`] propagates as an [`InvokeError`] through Actix's
/// standard error path instead of producing a success response.
async fn invoke(body: web::Bytes) -> Result<HttpResponse, InvokeError> {
    let request: InvokeRequest = serde_json::from_slice(&body)?;

    let response = InvokeResponse {
        tool: tools::mock::NAME.to_string(),
        output: tools::mock::run(&request.query),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Register the route table on an Actix app.
///
/// Split out so in-process tests can build the exact app the server binds.
/// Anything other than `POST /invoke` falls through to Actix's default
/// 404 handling; the mock deliberately has no other routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/invoke", web::post().to(invoke));
}

/// A bound mock MCP server instance.
///
/// Binding and serving are separate steps so callers can bind an ephemeral
/// port (`port = 0`), read the resulting address, and stop the instance when
/// done. The binary binds the fixed default address and runs until the
/// process is terminated.
pub struct MockMcpServer {
    server: Server,
    addr: SocketAddr,
}

impl MockMcpServer {
    /// Bind a listener and construct the server instance.
    ///
    /// Worker count follows CPU count but is capped low; this is a test
    /// double, not a production deployment.
    ///
    /// # Arguments
    /// * `host` - Bind address (e.g., "127.0.0.1")
    /// * `port` - Port number, or 0 for an ephemeral port
    pub fn bind(host: &str, port: u16) -> std::io::Result<Self> {
        let workers = num_cpus::get().min(4).max(1);

        let http = HttpServer::new(|| {
            App::new()
                // Enable compression for JSON responses (gzip/brotli)
                .wrap(Compress::default())
                // Configure request logging
                // Format: %r = request line, %s = status, %Dms = duration in milliseconds
                .wrap(Logger::new("%r %s %Dms"))
                .configure(configure)
        })
        .workers(workers)
        .bind((host, port))?;

        // bind() guarantees at least one listener on success; resolve the
        // actual address so ephemeral ports are observable.
        let addr = http.addrs().into_iter().next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                "listener bound no address",
            )
        })?;

        Ok(Self {
            server: http.run(),
            addr,
        })
    }

    /// The address the listener actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Handle for stopping this instance from another task.
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    /// Serve requests until stopped via [`handle`](Self::handle) or process
    /// termination.
    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}
