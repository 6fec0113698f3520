//! Terminal UI components.
//!
//! The screen is split top to bottom into:
//! - the buffer text with a line-number gutter
//! - the intent panel (phrase, last intent, reasons, preview)
//! - a one-row status bar

mod panel;
mod render;
mod status;

pub use render::{line_number_width, render, split_screen};
