use crate::app::model::ToastLevel;
use crate::app::Model;
use crate::editor::{Direction, Outcome, apply_intent};

/// All possible events and actions in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Feed a key code to the intent engine at a monotonic timestamp
    Keystroke { code: u32, at_ms: u64 },
    /// Insert a character verbatim (consumes a pending insert)
    InsertChar(char),
    /// Drop a pending insert without inserting
    CancelInsert,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Split line at cursor (Enter)
    SplitLine,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Ctrl+D)
    DeleteForward,
    /// Write the buffer to its file
    Save,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// File I/O for [`Message::Save`] happens afterwards in the event loop's
/// side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Save preserves the quit flag so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }

    match msg {
        Message::Keystroke { code, at_ms } => {
            let intent = model.engine.feed_at(code, at_ms);
            model.phrase_display = model.engine.current_phrase();
            if let Some(intent) = &intent {
                match apply_intent(&mut model.buffer, intent) {
                    Outcome::ArmInsert => model.pending_insert = true,
                    Outcome::Edited => model.ensure_cursor_visible(),
                    Outcome::Unchanged | Outcome::Unsupported => {}
                }
            }
            model.last_intent = intent;
        }
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            model.pending_insert = false;
            model.ensure_cursor_visible();
        }
        Message::CancelInsert => {
            model.pending_insert = false;
        }
        Message::MoveCursor(dir) => {
            model.buffer.move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::SplitLine => {
            model.buffer.split_line();
            model.ensure_cursor_visible();
        }
        Message::DeleteBack => {
            model.buffer.delete_back();
            model.ensure_cursor_visible();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }
        Message::Save => {}
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.ensure_cursor_visible();
        }
        Message::Quit => {
            if model.buffer.is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or Ctrl+S to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }
    model
}
