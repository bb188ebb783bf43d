/// A request as read off the wire: method plus target, nothing else.
///
/// Only the request line is ever consumed, so there are no headers and no
/// body. The method is kept as the raw token so handlers can be registered
/// for arbitrary verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token, case preserved (e.g. "GET")
    pub method: String,
    /// Target path up to the first `?` (e.g. "/index.html")
    pub path: String,
    /// Everything after the first `?`, if there was one
    pub query: Option<String>,
}

impl Request {
    /// Splits a request target on its first `?`.
    ///
    /// ```
    /// # use beacon::http::request::Request;
    /// let req = Request::new("GET", "/search?q=rust&page=2");
    /// assert_eq!(req.path, "/search");
    /// assert_eq!(req.query.as_deref(), Some("q=rust&page=2"));
    /// ```
    pub fn new(method: impl Into<String>, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (target, None),
        };

        Self {
            method: method.into(),
            path: path.to_string(),
            query,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
