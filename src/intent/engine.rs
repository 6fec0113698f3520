use serde::Serialize;

use super::clock::{Clock, MonotonicClock};
use super::error::ConfigError;
use super::grammar::PhraseGrammar;
use super::repetition::{RepetitionState, RepetitionTracker};
use super::scope::{Scope, resolve_scope};
use super::timing::{Confidence, ConfidenceThresholds};
use super::window::KeystrokeWindow;

/// Tuning knobs the engine is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long a keystroke stays eligible for phrase matching.
    pub window_ms: u64,
    /// Maximum gap between two emissions of the same phrase for escalation.
    pub repeat_window_ms: u64,
    pub thresholds: ConfidenceThresholds,
    pub grammar: PhraseGrammar,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_ms: 400,
            repeat_window_ms: 600,
            thresholds: ConfidenceThresholds::default(),
            grammar: PhraseGrammar::default(),
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for zero-length windows, inverted confidence
    /// thresholds, or an empty grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_ms == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.repeat_window_ms == 0 {
            return Err(ConfigError::ZeroRepeatWindow);
        }
        self.thresholds.validate()?;
        if self.grammar.is_empty() {
            return Err(ConfigError::EmptyGrammar);
        }
        Ok(())
    }
}

/// The engine's reading of what a recognized phrase asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intent {
    action: String,
    phrase: String,
    confidence: Confidence,
    level: u32,
    scope: Scope,
    reasons: Vec<String>,
    preview: String,
}

impl Intent {
    /// Action name from the grammar, e.g. `"delete"`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The phrase that was recognized, e.g. `"dd"`.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Repetition level, starting at 1.
    pub const fn level(&self) -> u32 {
        self.level
    }

    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Why the engine chose this confidence and scope.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// One-line summary: `delete [high] x2 → line`.
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] x{} → {}",
            self.action, self.confidence, self.level, self.scope
        )
    }
}

/// Turns a stream of key codes into [`Intent`]s.
///
/// Every call re-derives the phrase from the trimmed window; the only state
/// that outlives the window is the repetition counter.
#[derive(Debug)]
pub struct IntentEngine<C: Clock = MonotonicClock> {
    config: EngineConfig,
    window: KeystrokeWindow,
    repetition: RepetitionTracker,
    clock: C,
}

impl IntentEngine<MonotonicClock> {
    /// Engine timed by the process monotonic clock.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl Default for IntentEngine<MonotonicClock> {
    fn default() -> Self {
        Self::from_parts(EngineConfig::default(), MonotonicClock::new())
    }
}

impl<C: Clock> IntentEngine<C> {
    /// Engine timed by a caller-supplied clock.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, clock))
    }

    fn from_parts(config: EngineConfig, clock: C) -> Self {
        Self {
            window: KeystrokeWindow::new(config.window_ms),
            repetition: RepetitionTracker::new(config.repeat_window_ms),
            config,
            clock,
        }
    }

    /// Feed one key code, timestamped by the engine's clock.
    pub fn feed(&mut self, key: u32) -> Option<Intent> {
        let now_ms = self.clock.now_ms();
        self.feed_at(key, now_ms)
    }

    /// Feed one key code with an explicit monotonic timestamp.
    pub fn feed_at(&mut self, key: u32, now_ms: u64) -> Option<Intent> {
        self.window.feed(key, now_ms);

        let phrase = self.window.phrase();
        let action = self.config.grammar.lookup(&phrase)?.to_string();

        let confidence = self.config.thresholds.classify(&self.window);
        let level = self.repetition.resolve(&phrase, now_ms);
        let scope = resolve_scope(confidence, level);
        let reasons = explain(confidence, level);

        tracing::debug!(
            %phrase,
            %action,
            %confidence,
            level,
            %scope,
            mean_interval_ms = ?self.window.mean_interval_ms(),
            window_ms = self.window.window_ms(),
            repeat_window_ms = self.repetition.repeat_window_ms(),
            "intent recognized"
        );

        Some(Intent {
            action,
            phrase,
            confidence,
            level,
            scope,
            reasons,
            preview: scope.preview().to_string(),
        })
    }

    /// Printable content currently inside the window.
    pub fn current_phrase(&self) -> String {
        self.window.phrase()
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn window(&self) -> &KeystrokeWindow {
        &self.window
    }

    pub const fn repetition(&self) -> &RepetitionState {
        self.repetition.state()
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

fn explain(confidence: Confidence, level: u32) -> Vec<String> {
    let mut reasons = vec![confidence.describe().to_string()];
    if level > 1 {
        reasons.push(format!("repeated intent (x{level})"));
    }
    reasons
}
