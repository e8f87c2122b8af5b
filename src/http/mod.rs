//! HTTP protocol implementation.
//!
//! A reduced HTTP/1.1 subset: one request per read, no keep-alive
//! negotiation, no chunked bodies.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine driving parse, dispatch and write
//! - **`parser`**: turns the text of one request into a [`request::Request`]
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response with ordered headers
//! - **`writer`**: serializes and writes HTTP responses to the client
//! - **`mime`**: content type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the next chunk of data
//!        └──────┬──────┘
//!               │ Chunk received, parsed as one request
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch by method
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Reading (until the peer closes → Closed)
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
