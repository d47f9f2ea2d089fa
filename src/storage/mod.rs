//! Storage Layer
//!
//! The JSON settings file. Analyzes themselves are never persisted.

pub mod config;

pub use config::*;
