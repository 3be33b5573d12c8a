//! Static file serving module
//!
//! Loads assets from the document root, detects MIME types, and guards
//! against path traversal.

use crate::error::Result;
use crate::http::{mime, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve a static asset for the given request path.
///
/// Returns `Ok(None)` when no matching asset exists, leaving the 404
/// decision to the router.
pub async fn serve(
    static_dir: &str,
    path: &str,
    is_head: bool,
) -> Result<Option<Response<Full<Bytes>>>> {
    match load(static_dir, path).await {
        Some((content, content_type)) => Ok(Some(response::build_file_response(
            content,
            content_type,
            is_head,
        )?)),
        None => Ok(None),
    }
}

/// Load an asset from the document root, falling back to the index file
/// for `/` and directory paths
async fn load(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and strip traversal components up front
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    let mut file_path = Path::new(static_dir).join(&clean_path);
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        file_path = file_path.join(INDEX_FILE);
    }

    // Missing files are ordinary 404s, no need to log
    let file_path = file_path.canonicalize().ok()?;

    // Canonicalized path must stay within the document root
    if !file_path.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}
