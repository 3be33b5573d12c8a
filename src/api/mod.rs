// API module entry
// JSON endpoints backing the demo site

pub mod handlers;
pub mod response;
pub mod types;

use crate::error::Result;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

pub use response::{internal_error, not_found};

/// API route dispatch
///
/// Maps (method, path) pairs to handler functions; anything unmatched
/// falls through to the uniform 404 shape.
pub async fn handle_api_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    match (method, path.as_str()) {
        (Method::GET, "/api/health") => handlers::handle_health(),
        (Method::GET, "/api/users") => handlers::handle_users(),
        (Method::POST, "/api/contact") => handlers::handle_contact(req).await,
        _ => response::not_found(),
    }
}
