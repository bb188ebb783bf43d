use std::collections::BTreeSet;
use std::fs;

use beacon::resource::{FileResource, MemoryResource, MimeTable, Registry};

fn keys(registry: &Registry) -> BTreeSet<String> {
    registry.paths().map(str::to_string).collect()
}

#[test]
fn test_new_registry_is_empty() {
    let registry = Registry::new();

    assert!(registry.is_empty());
    assert!(registry.lookup("/").is_none());
}

#[test]
fn test_discover_registers_files_not_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(dir.path().join("a.html"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("b.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let registry = Registry::discover(dir.path()).unwrap();

    let expected: BTreeSet<String> = ["/", "/index.html", "/a.html", "/sub/b.png"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(keys(&registry), expected);
    assert!(!registry.contains("/sub"));
}

#[test]
fn test_discover_walks_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("x").join("y").join("z")).unwrap();
    fs::write(dir.path().join("x").join("y").join("z").join("deep.txt"), "deep").unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    let registry = Registry::discover(dir.path()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("/x/y/z/deep.txt"));
    assert!(!registry.contains("/empty"));
}

#[test]
fn test_discover_binds_root_even_without_index() {
    let dir = tempfile::tempdir().unwrap();

    let registry = Registry::discover(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
    let root = registry.lookup("/").unwrap();
    assert_eq!(root.mime(&MimeTable::default()).as_deref(), Some("text/html"));
    assert!(root.get_data(None).is_err());
}

#[test]
fn test_discover_root_serves_index_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "welcome").unwrap();

    let registry = Registry::discover(dir.path()).unwrap();

    assert_eq!(&registry.lookup("/").unwrap().get_data(None).unwrap()[..], b"welcome");
}

#[test]
fn test_discover_missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Registry::discover(dir.path().join("nope")).is_err());
}

#[test]
fn test_register_resource_last_write_wins() {
    let mut registry = Registry::new();
    registry.register_resource("/ping", MemoryResource::new("one", "text/plain"));
    registry.register_resource("/ping", MemoryResource::new("two", "text/plain"));

    assert_eq!(registry.len(), 1);
    assert_eq!(&registry.lookup("/ping").unwrap().get_data(None).unwrap()[..], b"two");
}

#[test]
fn test_register_resource_overrides_discovered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "disk").unwrap();

    let mut registry = Registry::discover(dir.path()).unwrap();
    registry.register_resource("/", MemoryResource::new("memory", "text/html"));
    registry.register_resource("/extra.html", FileResource::new(dir.path().join("index.html")));

    assert_eq!(&registry.lookup("/").unwrap().get_data(None).unwrap()[..], b"memory");
    assert_eq!(&registry.lookup("/extra.html").unwrap().get_data(None).unwrap()[..], b"disk");
}

#[test]
fn test_lookup_missing_path() {
    let registry = Registry::new();
    assert!(registry.lookup("/missing.xyz").is_none());
}

#[cfg(unix)]
#[test]
fn test_discover_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real").join("page.html"), "linked").unwrap();
    symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();
    symlink(dir.path().join("real").join("page.html"), dir.path().join("page-link.html")).unwrap();
    symlink(dir.path().join("nowhere.html"), dir.path().join("dangling.html")).unwrap();

    let registry = Registry::discover(dir.path()).unwrap();

    let expected: BTreeSet<String> = ["/", "/real/page.html", "/page-link.html"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(keys(&registry), expected);
    assert_eq!(
        &registry.lookup("/page-link.html").unwrap().get_data(None).unwrap()[..],
        b"linked"
    );
}
