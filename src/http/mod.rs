//! HTTP/1.0 protocol implementation.
//!
//! This module implements a GET-only HTTP/1.0 server core that parses the
//! request line incrementally, byte by byte, into fixed-size storage.
//!
//! # Architecture
//!
//! - **`request`**: bounded text fields and the parsed request (filename
//!   plus query entries)
//! - **`parser`**: the byte-driven request-line state machine
//! - **`response`**: status codes, content types and segmented responses
//! - **`writer`**: serializes and writes responses to the client
//! - **`connection`**: the per-connection handler driving parse and respond
//!
//! # Parser State Machine
//!
//! Each byte moves the parser through the request-line grammar
//! `"GET /" filename ( '?' name '=' value ( '&' name '=' value )* )? ' '`:
//!
//! ```text
//!        ┌─────────────┐
//!        │ AwaitMethod │ ← match the literal "GET /"
//!        └──────┬──────┘
//!               │ 5 bytes matched
//!               ▼
//!        ┌─────────────┐  ' '
//!        │ InFilename  ├──────────────────► Complete
//!        └──────┬──────┘
//!               │ '?'
//!               ▼
//!        ┌─────────────┐  '='  ┌──────────────┐  ' '
//!        │ InQueryName ├──────►│ InQueryValue ├──► Complete
//!        └─────────────┘       └──────┬───────┘
//!               ▲                     │ '&'
//!               └─────────────────────┘
//! ```
//!
//! Any illegal byte, or a field or entry list growing past its fixed
//! capacity, ends the parse with a terminal error.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
