use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::handler::{DispatchError, HandlerTable};
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One client connection, serving exactly one request.
pub struct Connection<S> {
    stream: BufReader<S>,
    handlers: Arc<HandlerTable>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handlers: Arc<HandlerTable>) -> Self {
        Self {
            stream: BufReader::new(stream),
            handlers,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request_line().await? {
                    Some(line) => match parse_request_line(&line) {
                        Ok(req) => self.state = ConnectionState::Processing(req),
                        Err(e) => {
                            warn!(error = %e, line = line.trim_end(), "Malformed request line");
                            self.state = ConnectionState::Writing(ResponseWriter::new(
                                &Response::bad_request(),
                            ));
                        }
                    },
                    None => {
                        debug!("Client closed before sending a request line");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = Self::handle_request(&self.handlers, req.clone()).await;
                    info!(
                        method = %req.method,
                        path = %req.path,
                        status = %response.status,
                        "Request served"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    // Never keep-alive: the close delimits the body.
                    if let Err(e) = self.stream.get_mut().shutdown().await {
                        debug!(error = %e, "Shutdown failed");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads up to and including the first `\n`.
    ///
    /// Returns `None` if the peer closed without sending anything. A final
    /// unterminated line is still returned.
    pub async fn read_request_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut raw = Vec::new();
        let n = self.stream.read_until(b'\n', &mut raw).await?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Dispatches on the blocking pool; resource reads are plain file I/O.
    async fn handle_request(handlers: &Arc<HandlerTable>, req: Request) -> Response {
        let handlers = Arc::clone(handlers);
        let result = tokio::task::spawn_blocking(move || handlers.dispatch(&req)).await;

        match result {
            Ok(Ok(response)) => response,
            Ok(Err(DispatchError::UnknownMethod(method))) => {
                warn!(method = %method, "No handler registered");
                Response::not_implemented()
            }
            Err(e) => {
                tracing::error!(error = %e, "Handler task failed");
                Response::internal_error()
            }
        }
    }
}
