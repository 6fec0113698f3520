use thiserror::Error;

/// Rejected engine configuration.
///
/// Raised when an engine is constructed, never while keys are fed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window_ms must be greater than zero")]
    ZeroWindow,

    #[error("repeat_window_ms must be greater than zero")]
    ZeroRepeatWindow,

    #[error("confidence thresholds must satisfy 0 < high ({high} ms) < medium ({medium} ms)")]
    Thresholds { high: u64, medium: u64 },

    #[error("phrase grammar has no entries")]
    EmptyGrammar,

    #[error("phrase grammar contains an empty phrase")]
    EmptyPhrase,

    #[error("phrase {0:?} contains characters outside printable ASCII")]
    NonPrintablePhrase(String),

    #[error("phrase {0:?} maps to an empty action name")]
    EmptyAction(String),
}
