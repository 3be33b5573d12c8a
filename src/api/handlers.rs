// REST endpoint handlers module

use super::response::{bad_request, json_response};
use super::types::{ContactAck, ContactForm, HealthStatus, USERS};
use crate::error::{Error, Result};
use crate::logger;
use chrono::{SecondsFormat, Utc};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};

const HEALTH_MESSAGE: &str = "Server is running!";
const CONTACT_OK_MESSAGE: &str = "Message sent successfully!";
const VALIDATION_MESSAGE: &str = "All fields are required";
const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON";

/// GET /api/health
///
/// Always succeeds; the timestamp is generated fresh per request.
pub fn handle_health() -> Result<Response<Full<Bytes>>> {
    let health = HealthStatus {
        status: "OK",
        message: HEALTH_MESSAGE,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    json_response(StatusCode::OK, &health)
}

/// GET /api/users
///
/// Returns the fixed user list in insertion order.
pub fn handle_users() -> Result<Response<Full<Bytes>>> {
    json_response(StatusCode::OK, &USERS)
}

/// POST /api/contact
///
/// Presence-checks the three required fields and echoes a confirmation.
/// Validation failures are answered locally with 400; only body-stream
/// and serialization failures propagate to the 500 layer.
pub async fn handle_contact<B>(req: Request<B>) -> Result<Response<Full<Bytes>>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| Error::Body(e.to_string()))?
        .to_bytes();

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            logger::log_warning(&format!("Rejected contact submission, bad JSON: {e}"));
            return bad_request(INVALID_JSON_MESSAGE);
        }
    };

    if !form.is_complete() {
        return bad_request(VALIDATION_MESSAGE);
    }

    // Submissions are deliberately not stored or forwarded anywhere;
    // this log line is the whole of "processing".
    logger::log_contact_received(
        form.name.as_deref().unwrap_or_default(),
        form.email.as_deref().unwrap_or_default(),
        form.message.as_deref().unwrap_or_default(),
    );

    json_response(
        StatusCode::OK,
        &ContactAck {
            success: true,
            message: CONTACT_OK_MESSAGE,
        },
    )
}
