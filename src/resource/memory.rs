use bytes::Bytes;

use crate::resource::{MimeTable, Resource};

/// Fixed content held in memory, with its own content type.
#[derive(Debug, Clone)]
pub struct MemoryResource {
    data: Bytes,
    mime: String,
}

impl MemoryResource {
    pub fn new(data: impl Into<Bytes>, mime: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime: mime.into(),
        }
    }
}

impl Resource for MemoryResource {
    fn get_data(&self, _query: Option<&str>) -> anyhow::Result<Bytes> {
        Ok(self.data.clone())
    }

    /// The table is not consulted; the type was fixed at registration.
    fn mime(&self, _table: &MimeTable) -> Option<String> {
        Some(self.mime.clone())
    }
}
