//! Phrase-driven intent recognition.
//!
//! Keys flow through a short time window; when the printable content of
//! the window exactly matches a grammar phrase the engine emits an
//! [`Intent`] whose scope grows with typing speed and repetition:
//!
//! ```text
//! key → KeystrokeWindow → PhraseGrammar → (Confidence, RepetitionTracker) → Scope → Intent
//! ```

mod clock;
mod engine;
mod error;
mod grammar;
mod repetition;
mod scope;
mod timing;
mod window;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use engine::{EngineConfig, Intent, IntentEngine};
pub use error::ConfigError;
pub use grammar::{DEFAULT_PHRASES, PhraseGrammar};
pub use repetition::{RepetitionState, RepetitionTracker};
pub use scope::{Scope, resolve_scope};
pub use timing::{Confidence, ConfidenceThresholds};
pub use window::{Keystroke, KeystrokeWindow, PRINTABLE_MAX, PRINTABLE_MIN, is_printable};
