use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{EngineStatus, Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_path.file_name().map_or_else(
        || "untitled".to_string(),
        |s| s.to_string_lossy().to_string(),
    );

    let buf = &model.buffer;
    let cursor = buf.cursor();
    let dirty_indicator = if buf.is_dirty() { " [modified]" } else { "" };
    let line = buf.line_at(cursor.line).unwrap_or_default();
    let col = line.get(..cursor.col).map_or(0, |before| before.chars().count());
    let engine_status = model.engine_status();

    let status = format!(
        " {filename}{dirty_indicator}  Ln {}, Col {}  {} lines  [{}]  Ctrl+S:save  Ctrl+Q:quit",
        cursor.line + 1,
        col + 1,
        buf.line_count(),
        engine_status.label(),
    );

    let bg = match engine_status {
        EngineStatus::Listening => Color::DarkGray,
        EngineStatus::IntentEmitted => Color::Blue,
        EngineStatus::Insert => Color::Magenta,
    };
    let status_bar = Paragraph::new(status).style(Style::default().bg(bg).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
