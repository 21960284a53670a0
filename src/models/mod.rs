//! Server-side models loaded at start-up.

pub mod config;
