// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. intent::IntentEngine)
    clippy::module_name_repetitions
)]

//! # Intently
//!
//! A terminal text editor driven by typed phrases instead of modes.
//!
//! Short phrases such as `dd` are recognized inside a sliding time window.
//! How fast the phrase was typed, and how often it was just repeated,
//! decide how much text the resulting edit touches: a character, a word,
//! a line, or a block.
//!
//! ## Architecture
//!
//! Intently uses The Elm Architecture (TEA) pattern:
//! - **Model**: Editor session state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`intent`]: Keystroke window, phrase grammar, and intent resolution
//! - [`editor`]: Rope-backed text buffer and intent actions
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved flag defaults
//! - [`intent_log`]: Optional JSON-lines log of emitted intents

pub mod app;
pub mod config;
pub mod editor;
pub mod intent;
pub mod intent_log;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::EditorBuffer;
    pub use crate::intent::{EngineConfig, Intent, IntentEngine, Scope};
}
