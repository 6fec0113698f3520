//! Editor session state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor session
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::key_code;
pub use model::{EngineStatus, INTENT_PANEL_HEIGHT, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::intent::EngineConfig;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    engine_config: EngineConfig,
}

impl App {
    /// Create a new application for the given file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            engine_config: EngineConfig::default(),
        }
    }

    /// Use a specific engine configuration instead of the defaults.
    #[must_use]
    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }
}
