//! Directory Layer
//!
//! Remote user directory: one-shot fetch into a cached snapshot, plus
//! client-side search and pagination over it.

mod cache;
mod client;
mod query;


pub use cache::{DirectoryCache, LoadStatus};
pub use client::{DirectoryClient, HttpDirectoryClient, DIRECTORY_URL};
pub use query::{DirectoryQuery, DEFAULT_PAGE_SIZE};
