//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Dispatches by method and path,
//! and converts any handler error into the uniform 500 JSON shape so that
//! internal detail never reaches the client.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Generic over the body type so tests can drive it with
/// `http_body_util::Full` while the server passes `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    let response = match dispatch(req, &state).await {
        Ok(response) => response,
        Err(e) => {
            // Full detail stays server-side; the client sees a fixed message
            logger::log_error(&format!("Handler failed for {method} {path}: {e}"));
            api::internal_error()
        }
    };

    if access_log {
        logger::log_response(&method, &path, response.status().as_u16());
    }

    Ok(response)
}

/// Route request based on method and path.
///
/// GET/HEAD requests outside `/api` go to the static file layer, with the
/// entry page served for `/`. Everything else is dispatched as an API
/// request and falls through to the 404 shape when unmatched.
async fn dispatch<B>(req: Request<B>, state: &Arc<AppState>) -> crate::Result<Response<Full<Bytes>>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let is_head = *req.method() == Method::HEAD;

    match (req.method(), req.uri().path()) {
        (&Method::GET | &Method::HEAD, path) if !path.starts_with("/api") => {
            match static_files::serve(&state.config.server.static_dir, path, is_head).await? {
                Some(response) => Ok(response),
                None => api::not_found(),
            }
        }
        _ => api::handle_api_request(req).await,
    }
}
