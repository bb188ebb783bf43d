//! Minimal HTTP/1.1 wire handling.
//!
//! Only the request line is read. Headers and bodies sent by the client are
//! never consumed, and every connection carries exactly one exchange.
//!
//! - **`connection`**: per-connection state machine
//! - **`parser`**: request line parsing
//! - **`request`**: the parsed `(method, path, query)` triple
//! - **`response`**: status, ordered headers and body, with a builder
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for one request line
//!        └──────┬──────┘
//!               │ Line received (malformed → 400, skip to Writing)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch by method on the blocking pool
//!        └──────┬───────────┘
//!               │ Response ready (unknown method → 501)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Shut the socket down
//!        └──────────────────┘
//! ```
//!
//! # Wire format
//!
//! ```text
//! GET /index.html?lang=en HTTP/1.1\r\n        (anything after this is ignored)
//!
//! HTTP/1.1 200\r\n
//! ContentType: text/html\r\n
//! \r\n
//! <raw file bytes>
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
