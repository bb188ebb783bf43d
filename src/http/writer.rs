use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders `resp` to its wire form.
///
/// The status line carries only the numeric code, headers follow in their
/// stored order, and the body is delimited by the connection close.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64 + resp.body.len());

    // Status line
    let status_line = format!("{} {}\r\n", HTTP_VERSION, resp.status.as_u16());
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{ResponseBuilder, StatusCode};

    #[test]
    fn headers_keep_insertion_order() {
        let resp = ResponseBuilder::new(StatusCode::Ok)
            .header("B", "2")
            .header("A", "1")
            .body("xy")
            .build();

        assert_eq!(serialize_response(&resp), b"HTTP/1.1 200\r\nB: 2\r\nA: 1\r\n\r\nxy");
    }

    #[tokio::test]
    async fn writes_whole_buffer() {
        let resp = Response::not_found();
        let mut out: Vec<u8> = Vec::new();

        ResponseWriter::new(&resp).write_to_stream(&mut out).await.unwrap();

        assert_eq!(out, b"HTTP/1.1 404\r\n\r\n");
    }
}
