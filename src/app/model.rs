use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::editor::EditorBuffer;
use crate::intent::{Intent, IntentEngine};

/// Rows reserved below the text for the intent panel (border + 4 lines).
pub const INTENT_PANEL_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// What the engine is doing, as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// Waiting for a phrase.
    Listening,
    /// The last keystroke completed a phrase.
    IntentEmitted,
    /// The next printable key is inserted verbatim.
    Insert,
}

impl EngineStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Listening => "LISTENING",
            Self::IntentEmitted => "INTENT EMITTED",
            Self::Insert => "INSERT",
        }
    }
}

/// The complete editor session.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The text being edited
    pub buffer: EditorBuffer,
    /// Phrase recognizer fed with every non-editing key
    pub engine: IntentEngine,
    /// Path the buffer is loaded from and saved to
    pub file_path: PathBuf,
    /// Terminal size (columns, rows)
    pub terminal_size: (u16, u16),
    /// Line index of the first visible buffer line
    pub scroll_offset: usize,
    /// One-shot: insert the next printable key instead of feeding the engine
    pub pending_insert: bool,
    /// Printable window content after the last fed key
    pub phrase_display: String,
    /// Intent produced by the last fed key, if any
    pub last_intent: Option<Intent>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    toast: Option<Toast>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(
            PathBuf::new(),
            EditorBuffer::empty(),
            IntentEngine::default(),
            (80, 24),
        )
    }
}

impl Model {
    pub fn new(
        file_path: PathBuf,
        buffer: EditorBuffer,
        engine: IntentEngine,
        terminal_size: (u16, u16),
    ) -> Self {
        Self {
            buffer,
            engine,
            file_path,
            terminal_size,
            scroll_offset: 0,
            pending_insert: false,
            phrase_display: String::new(),
            last_intent: None,
            should_quit: false,
            quit_confirmed: false,
            toast: None,
        }
    }

    pub fn engine_status(&self) -> EngineStatus {
        if self.pending_insert {
            EngineStatus::Insert
        } else if self.last_intent.is_some() {
            EngineStatus::IntentEmitted
        } else {
            EngineStatus::Listening
        }
    }

    /// Rows available for buffer text after the panel and status bar.
    pub fn text_height(&self) -> usize {
        usize::from(
            self.terminal_size
                .1
                .saturating_sub(INTENT_PANEL_HEIGHT + 1),
        )
    }

    /// Keep the cursor line inside the visible text rows.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.buffer.cursor().line;
        let visible_height = self.text_height();
        if visible_height == 0 {
            self.scroll_offset = cursor_line;
            return;
        }
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible_height {
            self.scroll_offset = cursor_line + 1 - visible_height;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
