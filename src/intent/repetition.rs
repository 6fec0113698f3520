/// Escalation state carried between recognized phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionState {
    pub last_phrase: Option<String>,
    pub last_time_ms: Option<u64>,
    pub level: u32,
}

/// Counts consecutive emissions of the same phrase.
///
/// The repeat window is measured from the previous *recognized emission*,
/// not from the previous keystroke, so a phrase typed slowly can still
/// escalate if it completes soon after the last one.
#[derive(Debug, Clone)]
pub struct RepetitionTracker {
    repeat_window_ms: u64,
    state: RepetitionState,
}

impl RepetitionTracker {
    pub fn new(repeat_window_ms: u64) -> Self {
        Self {
            repeat_window_ms,
            state: RepetitionState::default(),
        }
    }

    /// Record a recognized phrase and return its repetition level (≥ 1).
    pub fn resolve(&mut self, phrase: &str, now_ms: u64) -> u32 {
        let repeated = self.state.last_phrase.as_deref() == Some(phrase)
            && self
                .state
                .last_time_ms
                .is_some_and(|last| now_ms.saturating_sub(last) <= self.repeat_window_ms);

        if repeated {
            self.state.level = self.state.level.saturating_add(1);
        } else {
            self.state.level = 1;
        }

        self.state.last_phrase = Some(phrase.to_string());
        self.state.last_time_ms = Some(now_ms);
        self.state.level
    }

    pub const fn state(&self) -> &RepetitionState {
        &self.state
    }

    pub const fn repeat_window_ms(&self) -> u64 {
        self.repeat_window_ms
    }
}
