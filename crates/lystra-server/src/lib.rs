//! # lystra-server
//!
//! HTTP server for the Lystra to-do lists application.
//!
//! This crate provides the web surface:
//! - Router mapping the four URL patterns to handlers
//! - Handlers: home page, list detail, new list, add item
//! - HTML renderer for the home and list pages
//! - Server configuration and the binary entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handlers::AppState;
pub use routes::router;
