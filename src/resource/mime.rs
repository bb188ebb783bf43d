//! Extension to MIME type table.

use std::collections::HashMap;

const BUILTIN_TYPES: &[(&str, &str)] = &[
    // Text
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("xml", "application/xml"),
    // Scripts
    ("js", "application/javascript"),
    ("mjs", "application/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("wasm", "application/wasm"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    // Audio/video
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    // Fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    // Documents
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
];

/// Read-only map from file extension (without the dot) to MIME type.
///
/// Unknown extensions have no entry; there is no octet-stream fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Adds entries, replacing any existing mapping for the same extension.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (ext, mime) in entries {
            self.types.insert(ext.into(), mime.into());
        }
        self
    }

    /// Returns the MIME type for `ext`, matched exactly.
    ///
    /// ```
    /// # use beacon::resource::MimeTable;
    /// let table = MimeTable::default();
    /// assert_eq!(table.lookup("html"), Some("text/html"));
    /// assert_eq!(table.lookup("bin"), None);
    /// ```
    pub fn lookup(&self, ext: &str) -> Option<&str> {
        self.types.get(ext).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::empty().with_entries(BUILTIN_TYPES.iter().copied())
    }
}
