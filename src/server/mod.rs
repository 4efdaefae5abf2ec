//! Listener loop.

pub mod listener;
