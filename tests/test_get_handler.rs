use std::fs;
use std::sync::Arc;

use beacon::handler::{DispatchError, GetHandler, Handler, HandlerTable};
use beacon::http::request::Request;
use beacon::http::response::StatusCode;
use beacon::resource::{FileResource, MemoryResource, MimeTable, Registry};

fn handler_for(registry: Registry) -> GetHandler {
    GetHandler::new(Arc::new(registry), Arc::new(MimeTable::default()))
}

#[test]
fn test_get_root_serves_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>hello</h1>").unwrap();
    let handler = handler_for(Registry::discover(dir.path()).unwrap());

    let response = handler.handle("/", None);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers,
        vec![("ContentType".to_string(), "text/html".to_string())]
    );
    assert_eq!(&response.body[..], b"<h1>hello</h1>");
}

#[test]
fn test_get_unregistered_path_is_404() {
    let handler = handler_for(Registry::new());

    let response = handler.handle("/missing.xyz", None);

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_get_unknown_extension_is_404() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), [1u8, 2, 3]).unwrap();
    let handler = handler_for(Registry::discover(dir.path()).unwrap());

    let response = handler.handle("/data.bin", None);

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_get_missing_index_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let handler = handler_for(Registry::discover(dir.path()).unwrap());

    let response = handler.handle("/", None);

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[test]
fn test_get_unreadable_resource_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    fs::create_dir(&page).unwrap();
    let mut registry = Registry::new();
    // Reading a directory fails with something other than NotFound.
    registry.register_resource("/page.html", FileResource::new(page));
    let handler = handler_for(registry);

    let response = handler.handle("/page.html", None);

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_get_custom_header_name() {
    let mut registry = Registry::new();
    registry.register_resource("/ping", MemoryResource::new("pong", "text/plain"));
    let handler = handler_for(registry).with_content_type_header("Content-Type");

    let response = handler.handle("/ping", Some("x=1"));

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("ContentType"), None);
}

#[test]
fn test_dispatch_by_method() {
    let mut registry = Registry::new();
    registry.register_resource("/ping", MemoryResource::new("pong", "text/plain"));

    let mut table = HandlerTable::new();
    table.register("GET", Arc::new(handler_for(registry)));

    let response = table.dispatch(&Request::new("GET", "/ping")).unwrap();
    assert_eq!(&response.body[..], b"pong");

    let err = table.dispatch(&Request::new("POST", "/ping")).unwrap_err();
    assert_eq!(err, DispatchError::UnknownMethod("POST".to_string()));
}

#[test]
fn test_register_overwrites_method_binding() {
    let mut first = Registry::new();
    first.register_resource("/", MemoryResource::new("first", "text/plain"));
    let mut second = Registry::new();
    second.register_resource("/", MemoryResource::new("second", "text/plain"));

    let mut table = HandlerTable::new();
    table.register("GET", Arc::new(handler_for(first)));
    table.register("GET", Arc::new(handler_for(second)));

    let response = table.dispatch(&Request::new("GET", "/")).unwrap();
    assert_eq!(&response.body[..], b"second");
}
