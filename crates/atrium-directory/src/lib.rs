//! HTTP+JSON client for the remote member directory.
//!
//! Everything the rest of the workspace knows about the directory service
//! goes through the [`DirectoryClient`] trait; [`HttpDirectoryClient`] is the
//! wire implementation.

pub mod cache;
pub mod client;
pub mod error;
pub mod http_client;

#[cfg(test)]
mod tests;

pub use cache::CacheInvalidator;
pub use client::DirectoryClient;
pub use error::{DirectoryError, Result};
pub use http_client::HttpDirectoryClient;
