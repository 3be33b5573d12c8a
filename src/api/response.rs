// JSON response utility functions module

use super::types::ErrorBody;
use crate::error::Result;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Fixed message for unmatched routes
pub const NOT_FOUND_MESSAGE: &str = "Page not found";

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Full<Bytes>>> {
    let json = serde_json::to_string(body)?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))?)
}

/// 400 Bad Request with a descriptive error message
pub fn bad_request(message: &str) -> Result<Response<Full<Bytes>>> {
    json_response(
        StatusCode::BAD_REQUEST,
        &ErrorBody {
            error: message.to_string(),
        },
    )
}

/// 404 Not Found with the fixed not-found message
pub fn not_found() -> Result<Response<Full<Bytes>>> {
    json_response(
        StatusCode::NOT_FOUND,
        &ErrorBody {
            error: NOT_FOUND_MESSAGE.to_string(),
        },
    )
}

/// 500 Internal Server Error with a generic, non-leaking message.
///
/// Infallible: this is the last-resort response when a handler failed,
/// so it must not be able to fail itself.
pub fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from_static(
            br#"{"error":"Something went wrong"}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(b"Internal Server Error"))))
}
