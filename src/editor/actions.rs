use crate::intent::{Intent, Scope};

use super::buffer::EditorBuffer;

const WRAP_OPEN: char = '(';
const WRAP_CLOSE: char = ')';

/// Editing actions the editor knows how to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Delete,
    Clone,
    Wrap,
    Insert,
}

impl Action {
    /// Map a grammar action name to an editor action.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "delete" => Some(Self::Delete),
            "clone" => Some(Self::Clone),
            "wrap" => Some(Self::Wrap),
            "insert" => Some(Self::Insert),
            _ => None,
        }
    }
}

/// What applying an intent did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer changed.
    Edited,
    /// The next printable key should be inserted verbatim.
    ArmInsert,
    /// Nothing applicable at the cursor (e.g. deleting a word in whitespace).
    Unchanged,
    /// The action name has no editor meaning.
    Unsupported,
}

/// Carry out an intent's action at its scope on the cursor position.
pub fn apply_intent(buffer: &mut EditorBuffer, intent: &Intent) -> Outcome {
    let Some(action) = Action::from_name(intent.action()) else {
        tracing::debug!(action = intent.action(), "no editor binding for action");
        return Outcome::Unsupported;
    };
    let edited = match action {
        Action::Insert => return Outcome::ArmInsert,
        Action::Delete => delete(buffer, intent.scope()),
        Action::Clone => duplicate(buffer, intent.scope()),
        Action::Wrap => wrap(buffer, intent.scope()),
    };
    if edited {
        Outcome::Edited
    } else {
        Outcome::Unchanged
    }
}

fn delete(buffer: &mut EditorBuffer, scope: Scope) -> bool {
    match scope {
        Scope::Character => buffer.char_span().is_some_and(|span| buffer.delete_span(span)),
        Scope::Word => buffer.word_span().is_some_and(|span| buffer.delete_span(span)),
        Scope::Line => buffer.delete_lines(buffer.line_range()),
        Scope::Block => buffer.delete_lines(buffer.block_range()),
    }
}

fn duplicate(buffer: &mut EditorBuffer, scope: Scope) -> bool {
    match scope {
        Scope::Character => buffer
            .char_span()
            .is_some_and(|span| buffer.duplicate_span(span)),
        Scope::Word => buffer
            .word_span()
            .is_some_and(|span| buffer.duplicate_span(span)),
        Scope::Line => buffer.duplicate_lines(buffer.line_range()),
        Scope::Block => buffer.duplicate_lines(buffer.block_range()),
    }
}

fn wrap(buffer: &mut EditorBuffer, scope: Scope) -> bool {
    match scope {
        Scope::Character => buffer
            .char_span()
            .is_some_and(|span| buffer.wrap_span(span, WRAP_OPEN, WRAP_CLOSE)),
        Scope::Word => buffer
            .word_span()
            .is_some_and(|span| buffer.wrap_span(span, WRAP_OPEN, WRAP_CLOSE)),
        Scope::Line => buffer.wrap_lines(buffer.line_range(), WRAP_OPEN, WRAP_CLOSE),
        Scope::Block => buffer.wrap_lines(buffer.block_range(), WRAP_OPEN, WRAP_CLOSE),
    }
}
