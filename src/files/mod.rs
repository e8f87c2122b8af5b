//! Static file serving
//!
//! This module maps request targets onto the filesystem and picks the
//! handler for each request.

pub mod dispatch;
pub mod resolver;

pub use dispatch::{Dispatcher, Handler};
pub use resolver::StaticFiles;
