//! Text buffer and the edits intents are carried out with.
//!
//! Provides a rope-backed buffer with a single cursor, plus the mapping
//! from an [`Intent`](crate::intent::Intent)'s action and scope onto buffer
//! edits.

mod actions;
mod buffer;

pub use actions::{Action, Outcome, apply_intent};
pub use buffer::{Cursor, Direction, EditorBuffer};

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::intent::{EngineConfig, IntentEngine, ManualClock};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Move(Direction),
        Key(u32, u64),
        Insert(char),
        SplitLine,
        DeleteBack,
        DeleteForward,
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            proptest::sample::select(vec!["é", "ab", " ", "日本", "x y", "ñ ", "\r\n", "\n", "🦀"]),
            0..24,
        )
        .prop_map(|pieces| pieces.concat())
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            proptest::sample::select(vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ])
            .prop_map(Step::Move),
            (
                proptest::sample::select(vec![b'd', b'c', b'w', b'r', b'i', b'z']),
                0u64..700,
            )
                .prop_map(|(key, gap)| Step::Key(u32::from(key), gap)),
            proptest::sample::select(vec!['é', 'a', ' ', '本']).prop_map(Step::Insert),
            Just(Step::SplitLine),
            Just(Step::DeleteBack),
            Just(Step::DeleteForward),
        ]
    }

    proptest! {
        #[test]
        fn edits_keep_cursor_on_char_boundary(
            text in text_strategy(),
            steps in proptest::collection::vec(step_strategy(), 1..80),
        ) {
            let mut buffer = EditorBuffer::from_text(&text);
            let mut engine = IntentEngine::with_clock(EngineConfig::default(), ManualClock::new(0)).unwrap();
            let mut now = 0u64;
            for step in steps {
                match step {
                    Step::Move(direction) => buffer.move_cursor(direction),
                    Step::Key(key, gap) => {
                        now += gap;
                        if let Some(intent) = engine.feed_at(key, now) {
                            apply_intent(&mut buffer, &intent);
                        }
                    }
                    Step::Insert(ch) => buffer.insert_char(ch),
                    Step::SplitLine => buffer.split_line(),
                    Step::DeleteBack => {
                        buffer.delete_back();
                    }
                    Step::DeleteForward => {
                        buffer.delete_forward();
                    }
                }

                let cursor = buffer.cursor();
                prop_assert!(cursor.line < buffer.line_count());
                let line = buffer.line_at(cursor.line).unwrap_or_default();
                prop_assert!(cursor.col <= line.len());
                prop_assert!(line.is_char_boundary(cursor.col));
                buffer.char_span();
                buffer.word_span();

                let text = buffer.text();
                prop_assert!(!text.replace("\r\n", "").contains('\r'), "stray CR in {:?}", text);
            }
        }
    }
}
