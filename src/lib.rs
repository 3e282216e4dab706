//! Staticd - Minimal Concurrent Static File Server
//!
//! Core library for serving files from the working directory over HTTP/1.x.

pub mod config;
pub mod fs;
pub mod http;
pub mod server;
