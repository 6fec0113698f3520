use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::intent::{ConfigError, ConfidenceThresholds, EngineConfig};

/// Engine and logging settings gathered from saved defaults and the CLI.
///
/// Every field is optional so that file flags and CLI flags can be layered
/// with [`ConfigFlags::union`]; unset fields fall back to engine defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub window_ms: Option<u64>,
    pub repeat_window_ms: Option<u64>,
    pub high_ms: Option<u64>,
    pub medium_ms: Option<u64>,
    pub intent_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Layer `other` over `self`; values set in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            window_ms: other.window_ms.or(self.window_ms),
            repeat_window_ms: other.repeat_window_ms.or(self.repeat_window_ms),
            high_ms: other.high_ms.or(self.high_ms),
            medium_ms: other.medium_ms.or(self.medium_ms),
            intent_log: other
                .intent_log
                .clone()
                .or_else(|| self.intent_log.clone()),
        }
    }

    /// Build a validated engine configuration with the default grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the resulting windows or thresholds are
    /// invalid.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            window_ms: self.window_ms.unwrap_or(defaults.window_ms),
            repeat_window_ms: self.repeat_window_ms.unwrap_or(defaults.repeat_window_ms),
            thresholds: ConfidenceThresholds {
                high_ms: self.high_ms.unwrap_or(defaults.thresholds.high_ms),
                medium_ms: self.medium_ms.unwrap_or(defaults.thresholds.medium_ms),
            },
            grammar: defaults.grammar,
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("intently").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("intently")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("intently").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("intently")
                .join("config");
        }
    }

    PathBuf::from(".intentlyrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".intentlyrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# intently defaults (saved with --save)".to_string());
    if let Some(ms) = flags.window_ms {
        lines.push(format!("--window-ms {ms}"));
    }
    if let Some(ms) = flags.repeat_window_ms {
        lines.push(format!("--repeat-window-ms {ms}"));
    }
    if let Some(ms) = flags.high_ms {
        lines.push(format!("--high-ms {ms}"));
    }
    if let Some(ms) = flags.medium_ms {
        lines.push(format!("--medium-ms {ms}"));
    }
    if let Some(path) = &flags.intent_log {
        lines.push(format!("--intent-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from raw argument or config-file tokens.
///
/// Unknown tokens (including the program name and file argument) are
/// skipped; values that fail to parse leave the flag unset.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        if !matches!(
            name,
            "--window-ms" | "--repeat-window-ms" | "--high-ms" | "--medium-ms" | "--intent-log"
        ) {
            i += 1;
            continue;
        }
        let value = if let Some(value) = inline_value {
            Some(value)
        } else if let Some(next) = tokens.get(i + 1) {
            i += 1;
            Some(next.as_str())
        } else {
            None
        };
        if let Some(value) = value {
            match name {
                "--window-ms" => flags.window_ms = value.parse().ok(),
                "--repeat-window-ms" => flags.repeat_window_ms = value.parse().ok(),
                "--high-ms" => flags.high_ms = value.parse().ok(),
                "--medium-ms" => flags.medium_ms = value.parse().ok(),
                "--intent-log" => flags.intent_log = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "intently".to_string(),
            "--window-ms".to_string(),
            "300".to_string(),
            "--repeat-window-ms=800".to_string(),
            "--high-ms".to_string(),
            "90".to_string(),
            "--intent-log=intents.jsonl".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.window_ms, Some(300));
        assert_eq!(flags.repeat_window_ms, Some(800));
        assert_eq!(flags.high_ms, Some(90));
        assert_eq!(flags.medium_ms, None);
        assert_eq!(flags.intent_log, Some(PathBuf::from("intents.jsonl")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unparseable_numbers() {
        let args = vec!["--window-ms".to_string(), "soon".to_string()];
        assert_eq!(parse_flag_tokens(&args).window_ms, None);
    }

    #[test]
    fn test_config_union_prefers_cli_values() {
        let file = ConfigFlags {
            window_ms: Some(300),
            high_ms: Some(100),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            window_ms: Some(500),
            intent_log: Some(PathBuf::from("cli.jsonl")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.window_ms, Some(500));
        assert_eq!(merged.high_ms, Some(100));
        assert_eq!(merged.intent_log, Some(PathBuf::from("cli.jsonl")));
    }

    #[test]
    fn test_engine_config_defaults() {
        let config = ConfigFlags::default().engine_config().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_engine_config_applies_overrides() {
        let flags = ConfigFlags {
            window_ms: Some(350),
            medium_ms: Some(300),
            ..ConfigFlags::default()
        };
        let config = flags.engine_config().unwrap();
        assert_eq!(config.window_ms, 350);
        assert_eq!(config.repeat_window_ms, 600);
        assert_eq!(config.thresholds.high_ms, 120);
        assert_eq!(config.thresholds.medium_ms, 300);
    }

    #[test]
    fn test_engine_config_rejects_zero_window() {
        let flags = ConfigFlags {
            window_ms: Some(0),
            ..ConfigFlags::default()
        };
        assert_eq!(flags.engine_config(), Err(ConfigError::ZeroWindow));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            window_ms: Some(380),
            repeat_window_ms: Some(650),
            high_ms: Some(110),
            medium_ms: Some(240),
            intent_log: Some(PathBuf::from("intents.jsonl")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
