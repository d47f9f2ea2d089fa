//! Terminal View
//!
//! Draws presenter output and request state for the CLI.

pub mod card;

pub use card::{progress_bar, render_card, render_highlighted, render_state, Painter, BAR_CELLS};
