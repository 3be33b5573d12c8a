//! HTTP response building module
//!
//! Builders for static-file responses, decoupled from routing logic.

use crate::error::Result;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response for a static file.
///
/// HEAD requests get the same headers with an empty body.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Result<Response<Full<Bytes>>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))?)
}
