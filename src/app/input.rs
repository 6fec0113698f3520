use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::intent::is_printable;

// Codes for keys without an ASCII form, chosen outside the printable range
// so the engine treats them as invisible.
const KEY_DOWN: u32 = 258;
const KEY_UP: u32 = 259;
const KEY_LEFT: u32 = 260;
const KEY_RIGHT: u32 = 261;
const KEY_HOME: u32 = 262;
const KEY_F0: u32 = 264;
const KEY_DELETE: u32 = 330;
const KEY_INSERT: u32 = 331;
const KEY_PAGE_DOWN: u32 = 338;
const KEY_PAGE_UP: u32 = 339;
const KEY_BACK_TAB: u32 = 353;
const KEY_END: u32 = 360;
const KEY_OTHER: u32 = 511;

/// Integer code the intent engine sees for a key press.
///
/// Printable ASCII keeps its code; Ctrl+letter becomes the matching control
/// code; everything else lands outside `32..=126`.
pub fn key_code(key: &KeyEvent) -> u32 {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() =>
        {
            u32::from(c.to_ascii_lowercase()) & 0x1f
        }
        KeyCode::Char(c) => u32::from(c),
        KeyCode::Tab => 9,
        KeyCode::Enter => 13,
        KeyCode::Esc => 27,
        KeyCode::Backspace => 127,
        KeyCode::Down => KEY_DOWN,
        KeyCode::Up => KEY_UP,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::Home => KEY_HOME,
        KeyCode::F(n) => KEY_F0 + u32::from(n),
        KeyCode::Delete => KEY_DELETE,
        KeyCode::Insert => KEY_INSERT,
        KeyCode::PageDown => KEY_PAGE_DOWN,
        KeyCode::PageUp => KEY_PAGE_UP,
        KeyCode::BackTab => KEY_BACK_TAB,
        KeyCode::End => KEY_END,
        _ => KEY_OTHER,
    }
}

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model, now_ms: u64) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model, now_ms),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model, now_ms: u64) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
            KeyCode::Char('s') if ctrl => return Some(Message::Save),
            KeyCode::Char('d') if ctrl => return Some(Message::DeleteForward),
            KeyCode::Left => return Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => return Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => return Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => return Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Enter => return Some(Message::SplitLine),
            KeyCode::Backspace => return Some(Message::DeleteBack),
            _ => {}
        }

        if model.pending_insert {
            match key.code {
                KeyCode::Esc => return Some(Message::CancelInsert),
                KeyCode::Char(c) if !ctrl && is_printable(u32::from(c)) => {
                    return Some(Message::InsertChar(c));
                }
                _ => {}
            }
        }

        Some(Message::Keystroke {
            code: key_code(&key),
            at_ms: now_ms,
        })
    }
}
