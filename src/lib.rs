//! dynhttp - Dynamic HTTP/1.0 server
//!
//! Core library for a small GET-only HTTP/1.0 server: incremental request-line
//! parsing over fixed-size storage, a per-connection receive loop with a
//! timeout, and a fixed set of static and dynamic page handlers.

pub mod config;
pub mod http;
pub mod pages;
pub mod server;
