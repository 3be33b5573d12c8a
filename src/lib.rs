//! A small demonstration web server.
//!
//! Serves a static single-page site from a `public/` document root and
//! exposes three JSON endpoints: a health check, a hardcoded user listing,
//! and a contact-form echo. The routable application ([`config::AppState`]
//! plus [`handler::handle_request`]) is built independently of any socket,
//! so tests can drive it in-process; only the binary binds a listener.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::{AppState, Config};
pub use error::{Error, Result};
pub use handler::handle_request;
