use std::path::PathBuf;

use intently::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};
use intently::intent::ConfigError;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".intentlyrc");
    let content = r#"
# comment
--window-ms 500

--high-ms=90
   
--intent-log=intents.jsonl
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.window_ms, Some(500));
    assert_eq!(flags.high_ms, Some(90));
    assert_eq!(flags.intent_log, Some(PathBuf::from("intents.jsonl")));
    assert_eq!(flags.medium_ms, None);
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".intentlyrc");
    let content = "--window-ms 500\n--medium-ms 300\n--intent-log file.jsonl\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "intently".to_string(),
        "--window-ms".to_string(),
        "350".to_string(),
        "--repeat-window-ms=800".to_string(),
        "notes.txt".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(effective.window_ms, Some(350), "cli should override window");
    assert_eq!(effective.repeat_window_ms, Some(800), "cli flags should be applied");
    assert_eq!(effective.medium_ms, Some(300), "file flags should remain");
    assert_eq!(
        effective.intent_log,
        Some(PathBuf::from("file.jsonl")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_saved_flags_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intently").join("config");
    let flags = ConfigFlags {
        window_ms: Some(450),
        high_ms: Some(100),
        ..ConfigFlags::default()
    };
    save_config_flags(&path, &flags).unwrap();

    assert_eq!(load_config_flags(&path).unwrap(), flags);
}

#[test]
fn test_effective_flags_build_engine_config() {
    let flags = ConfigFlags {
        window_ms: Some(500),
        medium_ms: Some(300),
        ..ConfigFlags::default()
    };
    let config = flags.engine_config().unwrap();
    assert_eq!(config.window_ms, 500);
    assert_eq!(config.repeat_window_ms, 600);
    assert_eq!(config.thresholds.high_ms, 120);
    assert_eq!(config.thresholds.medium_ms, 300);
}

#[test]
fn test_inverted_thresholds_are_rejected() {
    let flags = ConfigFlags {
        high_ms: Some(300),
        medium_ms: Some(200),
        ..ConfigFlags::default()
    };
    assert_eq!(
        flags.engine_config().unwrap_err(),
        ConfigError::Thresholds {
            high: 300,
            medium: 200
        }
    );
}
