//! Utilities
//!
//! Error types and filesystem paths shared by the application crate.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
