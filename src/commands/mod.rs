//! Command Handlers
//!
//! One function per user-facing operation. Each returns a `CommandResponse`
//! that the CLI renders as text or prints as JSON.

pub mod analyze;
pub mod health;
pub mod interactive;
pub mod settings;

pub use analyze::*;
pub use health::*;
pub use interactive::*;
pub use settings::*;
