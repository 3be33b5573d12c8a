//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static file layer, decoupled from
//! specific business logic.

pub mod mime;
pub mod response;

pub use response::build_file_response;
