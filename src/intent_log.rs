//! Optional JSON-lines record of every emitted intent.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use serde::Serialize;

use crate::intent::Intent;

static INTENT_LOGGER: LazyLock<Mutex<IntentLogger>> =
    LazyLock::new(|| Mutex::new(IntentLogger::new()));

#[derive(Debug)]
struct IntentLogger {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl IntentLogger {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }
}

#[derive(Serialize)]
struct Entry<'a> {
    elapsed_ms: f64,
    #[serde(flatten)]
    intent: &'a Intent,
}

fn logger() -> MutexGuard<'static, IntentLogger> {
    INTENT_LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start logging to `path` (truncating it), or stop logging with `None`.
pub fn set_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut logger = logger();
    if let Some(path) = path {
        let file = File::create(path)?;
        logger.start = Instant::now();
        logger.writer = Some(BufWriter::new(file));
    } else if let Some(mut writer) = logger.writer.take() {
        writer.flush()?;
    }
    Ok(())
}

pub fn is_enabled() -> bool {
    logger().writer.is_some()
}

/// Append one intent as a JSON object on its own line.
pub fn record(intent: &Intent) {
    let mut logger = logger();
    let elapsed_ms = logger.start.elapsed().as_secs_f64() * 1000.0;
    let Some(writer) = logger.writer.as_mut() else {
        return;
    };
    let entry = Entry { elapsed_ms, intent };
    let result = serde_json::to_writer(&mut *writer, &entry)
        .map_err(std::io::Error::from)
        .and_then(|()| writeln!(writer))
        .and_then(|()| writer.flush());
    if let Err(err) = result {
        tracing::warn!(%err, "failed to write intent log entry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{EngineConfig, IntentEngine, ManualClock};
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_path_enables_logging_and_writes_json_lines() {
        let mut engine =
            IntentEngine::with_clock(EngineConfig::default(), ManualClock::new(0)).unwrap();
        engine.feed_at(u32::from(b'd'), 0);
        let intent = engine.feed_at(u32::from(b'd'), 40).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        set_log_path(Some(temp_file.path())).unwrap();
        assert!(is_enabled());
        record(&intent);
        set_log_path(None).unwrap();
        assert!(!is_enabled());

        // Other tests may record through the shared logger while it is open.
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let entries: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let value = entries
            .iter()
            .find(|value| value["phrase"] == "dd" && value["scope"] == "word")
            .expect("recorded intent");
        assert_eq!(value["action"], "delete");
        assert_eq!(value["confidence"], "high");
        assert_eq!(value["level"], 1);
        assert!(value["elapsed_ms"].is_number());
    }
}
