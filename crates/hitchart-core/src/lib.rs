//! Core domain model for hitchart.
//!
//! This crate defines the two-table chart data model (Artist, Song),
//! the SQLite schema, the read-only query layer, and the one-shot CSV
//! loader that materializes the store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod loader;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
