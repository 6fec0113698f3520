use std::fmt;

use serde::Serialize;

use super::timing::Confidence;

/// Span of text an action applies to, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Character,
    Word,
    Line,
    Block,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Word => "word",
            Self::Line => "line",
            Self::Block => "block",
        }
    }

    /// Short description of what the scope will touch.
    pub const fn preview(self) -> &'static str {
        match self {
            Self::Character => "current character",
            Self::Word => "current word",
            Self::Line => "current line",
            Self::Block => "current block",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the scope for a confidence tier and repetition level.
///
/// Repetition dominates from level 3 upward; below that, faster typing
/// widens the scope.
pub const fn resolve_scope(confidence: Confidence, level: u32) -> Scope {
    if level >= 3 {
        return Scope::Block;
    }
    match confidence {
        Confidence::High => {
            if level >= 2 {
                Scope::Line
            } else {
                Scope::Word
            }
        }
        Confidence::Medium => {
            if level == 1 {
                Scope::Word
            } else {
                Scope::Line
            }
        }
        Confidence::Low => Scope::Character,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_table_is_exhaustive() {
        use Confidence::{High, Low, Medium};
        use Scope::{Block, Character, Line, Word};

        let table = [
            (Low, 1, Character),
            (Low, 2, Character),
            (Low, 3, Block),
            (Low, 4, Block),
            (Medium, 1, Word),
            (Medium, 2, Line),
            (Medium, 3, Block),
            (Medium, 4, Block),
            (High, 1, Word),
            (High, 2, Line),
            (High, 3, Block),
            (High, 4, Block),
        ];
        for (confidence, level, expected) in table {
            assert_eq!(
                resolve_scope(confidence, level),
                expected,
                "confidence={confidence} level={level}"
            );
        }
    }

    #[test]
    fn test_preview_names_scope() {
        assert_eq!(Scope::Character.preview(), "current character");
        assert_eq!(Scope::Word.preview(), "current word");
        assert_eq!(Scope::Line.preview(), "current line");
        assert_eq!(Scope::Block.preview(), "current block");
    }

    #[test]
    fn test_scopes_order_by_size() {
        assert!(Scope::Character < Scope::Word);
        assert!(Scope::Word < Scope::Line);
        assert!(Scope::Line < Scope::Block);
    }
}
