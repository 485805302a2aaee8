//! JSON-over-HTTP service for the probability engine.
//!
//! Synchronous `tiny_http` serving loop: each request is parsed, handled
//! against immutable engine state, and answered with a JSON body. Every
//! query is independent and idempotent, so no cross-request state exists.

pub mod handlers;
pub mod routes;

use std::sync::Arc;
use std::thread::JoinHandle;

use tiny_http::{Header, Response, Server};

use dt_common::{Error, QueryId, Result};
use dt_config::{DiseaseRegistry, SymptomModel};

/// Engine state shared by all handlers.
pub struct AppState {
    pub registry: DiseaseRegistry,
    pub model: SymptomModel,
}

/// Bind address configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json; charset=utf-8")
        .expect("static header is valid")
}

fn run_loop(server: &Server, state: &AppState) {
    for mut request in server.incoming_requests() {
        let query = QueryId::new();
        let method = request.method().to_string();
        let path = request.url().to_string();

        let reply = routes::dispatch(state, &mut request);
        tracing::info!(
            query = %query,
            method = %method,
            path = %path,
            status = reply.status,
            "handled request"
        );

        let response = Response::from_string(reply.body)
            .with_status_code(reply.status)
            .with_header(json_header());
        if let Err(err) = request.respond(response) {
            tracing::warn!(query = %query, error = %err, "failed to deliver response");
        }
    }
}

/// Serve on the configured address until the process is stopped.
pub fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let server = Server::http(&addr)
        .map_err(|e| Error::Server(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!(
        address = %addr,
        presets = state.registry.len(),
        modeled = state.model.available_diseases().len(),
        "diagnostic triage service listening"
    );
    run_loop(&server, &state);
    Ok(())
}

/// Handle for a server running in a background thread.
///
/// Used by embedding callers and the end-to-end tests; `stop` unblocks the
/// serving loop and joins the thread.
pub struct ServerHandle {
    pub addr: std::net::SocketAddr,
    server: Arc<Server>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(thread) = self.thread.take() {
            self.server.unblock();
            let _ = thread.join();
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Bind (possibly to an OS-assigned port, e.g. `127.0.0.1:0`) and serve in
/// a background thread.
pub fn spawn(bind: &str, state: AppState) -> Result<ServerHandle> {
    let server =
        Server::http(bind).map_err(|e| Error::Server(format!("failed to bind {}: {}", bind, e)))?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| Error::Server("server has no IP address".to_string()))?;
    let server = Arc::new(server);
    let worker = Arc::clone(&server);
    let thread = std::thread::spawn(move || run_loop(&worker, &state));
    Ok(ServerHandle {
        addr,
        server,
        thread: Some(thread),
    })
}
