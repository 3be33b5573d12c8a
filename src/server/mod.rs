//! Server module entry
//!
//! Listener creation and the per-connection serve loop.

pub mod listener;

pub use listener::create_reusable_listener;

use crate::config::AppState;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections forever, serving each on its own task.
///
/// Connection concurrency, keep-alive, and timeouts are left to hyper's
/// defaults; the handlers themselves are stateless.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if state.config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                serve_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task
fn serve_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
