//! Addressable content.
//!
//! A [`Resource`] supplies bytes and a MIME type. The [`Registry`] binds
//! resources to URL paths; the binding, not the resource, carries identity.
//!
//! - **`file`**: resources backed by a file on disk, re-read on every request
//! - **`memory`**: fixed in-memory content, for dynamic registration
//! - **`mime`**: the extension to MIME type table
//! - **`registry`**: path to resource map and directory discovery

pub mod file;
pub mod memory;
pub mod mime;
pub mod registry;

use bytes::Bytes;

pub use file::FileResource;
pub use memory::MemoryResource;
pub use mime::MimeTable;
pub use registry::Registry;

/// Content exposed at a URL path.
///
/// Both methods may block. `mime` must give the same answer on every call,
/// regardless of whether `get_data` ran in between.
pub trait Resource: Send + Sync {
    /// Returns the current content. `query` is the raw text after `?`.
    fn get_data(&self, query: Option<&str>) -> anyhow::Result<Bytes>;

    /// Resolves the content type, or `None` if it has no known type.
    fn mime(&self, table: &MimeTable) -> Option<String>;
}
