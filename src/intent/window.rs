use std::collections::VecDeque;

/// Lowest key code treated as a printable phrase character (space).
pub const PRINTABLE_MIN: u32 = 32;
/// Highest key code treated as a printable phrase character (`~`).
pub const PRINTABLE_MAX: u32 = 126;

/// Whether a key code contributes a character to phrase matching.
pub const fn is_printable(key: u32) -> bool {
    key >= PRINTABLE_MIN && key <= PRINTABLE_MAX
}

/// A raw key code and the moment it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keystroke {
    pub key: u32,
    pub time_ms: u64,
}

impl Keystroke {
    /// Character form of the key, if it is printable ASCII.
    pub fn printable_char(self) -> Option<char> {
        if is_printable(self.key) {
            char::from_u32(self.key)
        } else {
            None
        }
    }
}

/// Recent keystrokes, in arrival order, no older than `window_ms`.
#[derive(Debug, Clone)]
pub struct KeystrokeWindow {
    entries: VecDeque<Keystroke>,
    window_ms: u64,
}

impl KeystrokeWindow {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            entries: VecDeque::new(),
            window_ms,
        }
    }

    /// Append a keystroke and drop every entry older than the window.
    pub fn feed(&mut self, key: u32, now_ms: u64) {
        self.entries.push_back(Keystroke { key, time_ms: now_ms });
        self.trim(now_ms);
    }

    fn trim(&mut self, now_ms: u64) {
        let window_ms = self.window_ms;
        let before = self.entries.len();
        self.entries
            .retain(|k| now_ms.saturating_sub(k.time_ms) <= window_ms);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::trace!(dropped, kept = self.entries.len(), "keystroke window trimmed");
        }
    }

    /// Printable content of the window.
    ///
    /// Control and navigation codes are skipped without breaking the
    /// surrounding characters apart.
    pub fn phrase(&self) -> String {
        self.entries
            .iter()
            .filter_map(|k| k.printable_char())
            .collect()
    }

    /// Sum of consecutive inter-arrival gaps and the number of gaps.
    ///
    /// `None` when fewer than two keystrokes are in the window.
    pub fn interval_totals(&self) -> Option<(u64, u64)> {
        if self.entries.len() < 2 {
            return None;
        }
        let total = self
            .entries
            .iter()
            .zip(self.entries.iter().skip(1))
            .map(|(prev, next)| next.time_ms.saturating_sub(prev.time_ms))
            .sum();
        Some((total, (self.entries.len() - 1) as u64))
    }

    /// Mean inter-arrival gap in milliseconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_interval_ms(&self) -> Option<f64> {
        self.interval_totals()
            .map(|(total, gaps)| total as f64 / gaps as f64)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keystroke> {
        self.entries.iter()
    }
}
