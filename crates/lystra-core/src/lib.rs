//! # lystra-core
//!
//! Core domain types for the Lystra to-do lists application.
//!
//! This crate provides the shared vocabulary of the workspace:
//! - [`List`] and [`Item`] records with their newtype identifiers
//! - The central [`Error`] type and [`Result`] alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Item, ItemId, List, ListId};
