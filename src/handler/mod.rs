//! Method handlers.
//!
//! The server keeps one [`Handler`] per HTTP method and hands it the parsed
//! path and query of each request.

pub mod get;

use std::collections::HashMap;
use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;

pub use get::GetHandler;

/// Turns a request path and query into a response.
///
/// Called from the blocking thread pool, so implementations may do plain
/// blocking I/O.
pub trait Handler: Send + Sync {
    fn handle(&self, path: &str, query: Option<&str>) -> Response;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler is registered for this method
    UnknownMethod(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownMethod(method) => write!(f, "no handler for method {method}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Method to handler bindings.
#[derive(Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `method`, replacing any previous binding.
    pub fn register(&mut self, method: impl Into<String>, handler: Arc<dyn Handler>) {
        self.handlers.insert(method.into(), handler);
    }

    fn get(&self, method: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(method).cloned()
    }

    /// Runs the handler bound to the request's method.
    pub fn dispatch(&self, req: &Request) -> Result<Response, DispatchError> {
        let handler = self
            .get(&req.method)
            .ok_or_else(|| DispatchError::UnknownMethod(req.method.clone()))?;
        Ok(handler.handle(&req.path, req.query()))
    }
}
