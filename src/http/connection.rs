use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::parser::{FeedOutcome, RequestParser};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::pages::Responder;

/// Serves a single connection: drives the request parser across received
/// chunks, bounded by a receive timeout, and sends exactly one response on
/// a terminal parse outcome.
///
/// Parser and query storage are owned by the connection, so each accepted
/// connection parses into its own state.
pub struct Connection {
    stream: TcpStream,
    parser: RequestParser,
    responder: Responder,
    recv_timeout: Duration,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Responding(Response),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, recv_timeout: Duration) -> Self {
        Self {
            stream,
            parser: RequestParser::new(),
            responder: Responder::default(),
            recv_timeout,
            state: ConnectionState::Reading,
        }
    }

    /// Runs the connection to completion. The stream is shut down exactly
    /// once, on every exit path.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.parser.reset();

        let result = self.drive().await;
        let _ = self.stream.shutdown().await;
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = self.read_request().await;
                }

                ConnectionState::Responding(response) => {
                    let mut writer = ResponseWriter::new(&response);
                    writer.write_to_stream(&mut self.stream).await?;
                    // state already advanced to Closed
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Reads chunks until the parser reaches a terminal outcome or the
    /// transport gives up. Timeout, transport error and peer close all end
    /// the connection with nothing sent.
    async fn read_request(&mut self) -> ConnectionState {
        let mut chunk = [0u8; 1024];

        loop {
            let n = match timeout(self.recv_timeout, self.stream.read(&mut chunk)).await {
                Err(_) => {
                    tracing::debug!("receive timed out");
                    return ConnectionState::Closed;
                }
                Ok(Err(e)) => {
                    tracing::debug!("transport error while reading: {}", e);
                    return ConnectionState::Closed;
                }
                Ok(Ok(0)) => {
                    tracing::debug!("peer closed before request completed");
                    return ConnectionState::Closed;
                }
                Ok(Ok(n)) => n,
            };

            // Chunk boundaries are transparent to the parser; once a
            // terminal outcome is reached the rest of the chunk is dropped.
            for &byte in &chunk[..n] {
                match self.parser.feed(byte) {
                    FeedOutcome::Continue => {}
                    FeedOutcome::Complete => {
                        let response = self.responder.respond(self.parser.request());
                        return ConnectionState::Responding(response);
                    }
                    FeedOutcome::Error(kind) => {
                        tracing::warn!(kind = ?kind, "malformed request");
                        return ConnectionState::Responding(self.responder.bad_request());
                    }
                }
            }
        }
    }
}
