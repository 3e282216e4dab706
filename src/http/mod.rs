//! HTTP protocol implementation.
//!
//! This module implements the single-shot HTTP/1.x pipeline: each accepted
//! connection carries exactly one request/response cycle and is then closed.
//! The closed connection is what frames the response body; no
//! `Content-Length` is emitted.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler driving read → parse →
//!   resolve → write
//! - **`parser`**: Extracts the request target from the first line of the
//!   received bytes
//! - **`path`**: Percent-decodes the target and derives the file extension
//! - **`mime`**: Content-Type lookup based on file extensions
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Request Pipeline
//!
//! ```text
//!   read ──▶ parse ──▶ decode ──▶ resolve file ──▶ build ──▶ write ──▶ close
//!              │                       │
//!              │ no match              │ not found
//!              ▼                       ▼
//!        close silently           404 response
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod path;
pub mod response;
pub mod writer;
