//! Feed implementations module.
//!
//! This module contains different implementations of the `ReadingFeed` trait:
//! - `mock`: the fixed demo farm
//! - `local`: in-memory implementation for unit testing and local development
//! - `json_file`: a JSON document on disk refreshed by an external process
pub mod json_file;
pub mod local;
pub mod mock;

pub use json_file::{FarmDocument, JsonFileFeed};
pub use local::LocalFeed;
pub use mock::MockFeed;
