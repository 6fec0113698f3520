use std::fmt;

use serde::Serialize;

use super::error::ConfigError;
use super::window::KeystrokeWindow;

/// How deliberate a phrase looked, judged by typing speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable reason for this tier.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::High => "fast typing",
            Self::Medium => "moderate typing speed",
            Self::Low => "slow or deliberate typing",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean-gap cutoffs, in milliseconds, separating the confidence tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceThresholds {
    /// Mean gaps strictly below this are [`Confidence::High`].
    pub high_ms: u64,
    /// Mean gaps strictly below this (and not high) are [`Confidence::Medium`].
    pub medium_ms: u64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high_ms: 120,
            medium_ms: 250,
        }
    }
}

impl ConfidenceThresholds {
    /// # Errors
    ///
    /// Returns [`ConfigError::Thresholds`] unless `0 < high_ms < medium_ms`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.high_ms == 0 || self.high_ms >= self.medium_ms {
            return Err(ConfigError::Thresholds {
                high: self.high_ms,
                medium: self.medium_ms,
            });
        }
        Ok(())
    }

    /// Confidence for the current window contents.
    ///
    /// A window with fewer than two keystrokes has no timing data and is
    /// always low.
    pub fn classify(&self, window: &KeystrokeWindow) -> Confidence {
        window
            .interval_totals()
            .map_or(Confidence::Low, |(total, gaps)| self.classify_totals(total, gaps))
    }

    /// Compares `total / gaps` against the thresholds without rounding.
    pub const fn classify_totals(&self, total_ms: u64, gaps: u64) -> Confidence {
        if gaps == 0 {
            return Confidence::Low;
        }
        if total_ms < self.high_ms.saturating_mul(gaps) {
            Confidence::High
        } else if total_ms < self.medium_ms.saturating_mul(gaps) {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with_gaps(gaps: &[u64]) -> KeystrokeWindow {
        let mut window = KeystrokeWindow::new(10_000);
        let mut now = 0;
        window.feed(u32::from(b'x'), now);
        for gap in gaps {
            now += gap;
            window.feed(u32::from(b'x'), now);
        }
        window
    }

    #[test]
    fn test_single_key_is_low() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(thresholds.classify(&window_with_gaps(&[])), Confidence::Low);
    }

    #[test]
    fn test_empty_window_is_low() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            thresholds.classify(&KeystrokeWindow::new(400)),
            Confidence::Low
        );
    }

    #[test]
    fn test_fast_gaps_are_high() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            thresholds.classify(&window_with_gaps(&[50, 50])),
            Confidence::High
        );
    }

    #[test]
    fn test_slow_gap_is_low() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            thresholds.classify(&window_with_gaps(&[600])),
            Confidence::Low
        );
    }

    #[test]
    fn test_threshold_boundaries() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(thresholds.classify_totals(119, 1), Confidence::High);
        assert_eq!(thresholds.classify_totals(120, 1), Confidence::Medium);
        assert_eq!(thresholds.classify_totals(249, 1), Confidence::Medium);
        assert_eq!(thresholds.classify_totals(250, 1), Confidence::Low);
    }

    #[test]
    fn test_mean_not_last_gap_decides() {
        // 10 + 400 averages to 205: medium, even though the last gap is slow.
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            thresholds.classify(&window_with_gaps(&[10, 400])),
            Confidence::Medium
        );
    }

    #[test]
    fn test_fractional_mean_is_not_rounded_down() {
        // 239 / 2 = 119.5 -> high; 241 / 2 = 120.5 -> medium
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(thresholds.classify_totals(239, 2), Confidence::High);
        assert_eq!(thresholds.classify_totals(241, 2), Confidence::Medium);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let bad = ConfidenceThresholds {
            high_ms: 300,
            medium_ms: 200,
        };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::Thresholds {
                high: 300,
                medium: 200
            })
        );
        let zero = ConfidenceThresholds {
            high_ms: 0,
            medium_ms: 200,
        };
        assert!(zero.validate().is_err());
        assert!(ConfidenceThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_describe_matches_tier() {
        assert_eq!(Confidence::High.describe(), "fast typing");
        assert_eq!(Confidence::Medium.describe(), "moderate typing speed");
        assert_eq!(Confidence::Low.describe(), "slow or deliberate typing");
        assert_eq!(Confidence::Medium.to_string(), "medium");
    }
}
