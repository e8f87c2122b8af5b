//! Fileserve - minimal static file server
//!
//! Core library for HTTP parsing, response serialization and file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
