//! HTTP protocol implementation.
//!
//! This module implements the wire side of the server: parsing one request
//! from a raw socket and writing one response back.
//!
//! - **`connection`**: per-connection handler (one request, one response, close)
//! - **`parser`**: reads and validates an HTTP/1.1 request from a byte stream
//! - **`request`**: parsed request representation and builder
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! Each accepted connection serves exactly one request/response cycle;
//! there is no keep-alive state to track, so the connection handler is a
//! straight line from parse to write.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
