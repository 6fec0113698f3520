use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::editor::EditorBuffer;
use crate::intent::{Clock, IntentEngine, MonotonicClock};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine configuration is invalid, the file
    /// cannot be read, or terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let engine = IntentEngine::new(self.engine_config.clone())
            .context("Invalid intent engine configuration")?;
        let buffer = self.load_buffer()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: intently requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            buffer,
            engine,
            (size.width, size.height),
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// Read the file into a buffer; a missing file starts a new, empty one.
    fn load_buffer(&self) -> Result<EditorBuffer> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(text) => Ok(EditorBuffer::from_text(&text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.file_path.display(), "new file");
                Ok(EditorBuffer::empty())
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read {}", self.file_path.display())),
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let clock = MonotonicClock::new();
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            // Keys are processed one at a time so each is timestamped as it
            // arrives and fully applied before the next is read.
            if event::poll(Duration::from_millis(250))? {
                let now_ms = clock.now_ms();
                if let Some(msg) = Self::handle_event(&event::read()?, model, now_ms) {
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }
            }
        }
        Ok(())
    }
}
