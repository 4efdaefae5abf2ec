use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{HTTP_VERSION, Response, SERVER_LINE};

/// Serializes a response into wire bytes: status line, server line,
/// content-type line terminated by a blank line, then the body segments.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(SERVER_LINE.as_bytes());

    let content_type_line = format!("Content-type: {}\r\n\r\n", resp.content_type.as_str());
    buf.extend_from_slice(content_type_line.as_bytes());

    for chunk in &resp.body {
        buf.extend_from_slice(chunk);
    }

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

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
