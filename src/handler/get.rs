use std::sync::Arc;

use tracing::{debug, error};

use crate::config::LEGACY_CONTENT_TYPE_HEADER;
use crate::handler::Handler;
use crate::http::response::Response;
use crate::resource::{MimeTable, Registry};

/// Serves registered resources for `GET`.
pub struct GetHandler {
    registry: Arc<Registry>,
    mime_table: Arc<MimeTable>,
    content_type_header: String,
}

impl GetHandler {
    pub fn new(registry: Arc<Registry>, mime_table: Arc<MimeTable>) -> Self {
        Self {
            registry,
            mime_table,
            content_type_header: LEGACY_CONTENT_TYPE_HEADER.to_string(),
        }
    }

    /// Sets the header name carrying the MIME type (e.g. `Content-Type`).
    pub fn with_content_type_header(mut self, name: impl Into<String>) -> Self {
        self.content_type_header = name.into();
        self
    }
}

impl Handler for GetHandler {
    fn handle(&self, path: &str, query: Option<&str>) -> Response {
        let Some(resource) = self.registry.lookup(path) else {
            debug!(path, "No resource registered");
            return Response::not_found();
        };

        // A resource whose type can't be resolved is treated as missing.
        let Some(mime) = resource.mime(&self.mime_table) else {
            debug!(path, "No MIME type for resource");
            return Response::not_found();
        };

        match resource.get_data(query) {
            Ok(body) => Response::ok(&self.content_type_header, mime, body),
            Err(e) if is_not_found(&e) => {
                debug!(path, error = %e, "Resource vanished");
                Response::not_found()
            }
            Err(e) => {
                error!(path, error = %e, "Failed to read resource");
                Response::internal_error()
            }
        }
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}
