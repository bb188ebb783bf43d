use std::collections::HashMap;
use std::path::{Component, Path};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, warn};

use crate::resource::{FileResource, Resource};

/// Maps URL paths to resources.
///
/// Built and mutated during startup only. The server receives it behind an
/// `Arc` and from then on it is shared read-only between connections, which
/// is why no lock guards it.
#[derive(Default)]
pub struct Registry {
    resources: HashMap<String, Arc<dyn Resource>>,
}

impl Registry {
    /// An empty registry, without even a `/` entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `root` and registers every non-directory entry beneath it.
    ///
    /// `/` is bound to `<root>/index.html` whether or not that file exists.
    /// Each file is bound at `/` plus its root-relative path with `/`
    /// separators. Directories are walked but never become keys. Links to
    /// files are registered; links to directories and dangling links are skipped.
    pub fn discover(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let mut registry = Self::new();

        registry.register_resource("/", FileResource::new(root.join("index.html")));
        registry
            .discover_recursive(root, root)
            .with_context(|| format!("failed to walk directory {}", root.display()))?;

        debug!(root = %root.display(), resources = registry.len(), "Discovery complete");
        Ok(registry)
    }

    fn discover_recursive(&mut self, root: &Path, dir: &Path) -> std::io::Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let entry_path = entry.path();

            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.discover_recursive(root, &entry_path)?;
                continue;
            }

            // Links are resolved only to classify them; linked directories are not walked.
            if file_type.is_symlink() {
                match std::fs::metadata(&entry_path) {
                    Ok(meta) if meta.is_dir() => {
                        debug!(path = %entry_path.display(), "Skipping link to directory");
                        continue;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(path = %entry_path.display(), error = %e, "Skipping dangling link");
                        continue;
                    }
                }
            }

            let relative = entry_path.strip_prefix(root).unwrap_or(&entry_path);
            match url_path(relative) {
                Some(key) => self.register_resource(key, FileResource::new(entry_path)),
                None => warn!(path = %entry_path.display(), "Skipping file with non UTF-8 name"),
            }
        }
        Ok(())
    }

    /// Binds `resource` at `path`, replacing any previous binding.
    pub fn register_resource(&mut self, path: impl Into<String>, resource: impl Resource + 'static) {
        self.register_shared(path, Arc::new(resource));
    }

    /// Like [`Registry::register_resource`] for a resource that is already shared.
    pub fn register_shared(&mut self, path: impl Into<String>, resource: Arc<dyn Resource>) {
        let path = path.into();
        debug!(path = %path, "Registering resource");
        self.resources.insert(path, resource);
    }

    /// Returns the resource bound at `path`, if any.
    pub fn lookup(&self, path: &str) -> Option<&dyn Resource> {
        self.resources.get(path).map(|r| &**r)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.resources.contains_key(path)
    }

    /// All bound paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// `a/b/c.png` -> `/a/b/c.png`, independent of the platform separator.
fn url_path(relative: &Path) -> Option<String> {
    let mut key = String::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            key.push('/');
            key.push_str(name.to_str()?);
        }
    }
    Some(key)
}
