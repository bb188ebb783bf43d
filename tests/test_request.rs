use beacon::http::request::Request;

#[test]
fn test_request_new_without_query() {
    let req = Request::new("GET", "/index.html");

    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/index.html");
    assert_eq!(req.query(), None);
}

#[test]
fn test_request_new_with_query() {
    let req = Request::new("GET", "/img/logo.png?v=3");

    assert_eq!(req.path, "/img/logo.png");
    assert_eq!(req.query(), Some("v=3"));
}

#[test]
fn test_request_query_may_be_empty() {
    let req = Request::new("GET", "/page?");

    assert_eq!(req.path, "/page");
    assert_eq!(req.query(), Some(""));
}
