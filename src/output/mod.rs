//! Output formatting for subnet summaries.
//!
//! - [`terminal`] - tab-separated text, one field per line
//! - [`json`] - JSON object

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_field, render_text};
