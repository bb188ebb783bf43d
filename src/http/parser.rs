use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line, or nothing but whitespace
    Empty,
    /// A method with no request target after it
    MissingTarget,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request line"),
            ParseError::MissingTarget => f.write_str("request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `METHOD TARGET [ignored...]` into a [`Request`].
///
/// The line may still carry its `\r\n` terminator. Tokens after the target
/// (normally the HTTP version) are ignored.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::Empty)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;

    Ok(Request::new(method, target))
}
