//! # lystra-store
//!
//! Storage backends for the Lystra to-do lists application.
//!
//! This crate provides:
//! - The [`ListStore`] repository trait that handlers program against
//! - [`SqliteStore`]: SQLite persistence via sqlx
//! - [`MemoryStore`]: in-memory storage (for testing)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ListStore;
