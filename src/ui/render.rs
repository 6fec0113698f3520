use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::{INTENT_PANEL_HEIGHT, Model};

use super::{panel, status};

/// Split the screen into text, intent panel, and status bar rows.
pub fn split_screen(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INTENT_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let chunks = split_screen(frame.area());
    let text_area = chunks[0];

    render_text(model, frame, text_area);

    if model.active_toast().is_some() && text_area.height > 0 {
        let toast_area = Rect {
            y: text_area.y + text_area.height - 1,
            height: 1,
            ..text_area
        };
        status::render_toast_bar(model, frame, toast_area);
    }

    panel::render_intent_panel(model, frame, chunks[1]);
    status::render_status_bar(model, frame, chunks[2]);
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            let (before, under, after) = split_at_cursor(&line_text, cursor.col);
            if !before.is_empty() {
                spans.push(Span::raw(before.to_string()));
            }
            spans.push(Span::styled(
                under.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after.to_string()));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

/// Split a line around the cursor column. Past the end of the line the
/// cursor cell is a blank.
pub(super) fn split_at_cursor(line: &str, col: usize) -> (&str, &str, &str) {
    let mut col = col.min(line.len());
    while !line.is_char_boundary(col) {
        col -= 1;
    }
    let (before, rest) = line.split_at(col);
    let Some(ch) = rest.chars().next() else {
        return (line, " ", "");
    };
    let (under, after) = rest.split_at(ch.len_utf8());
    (before, under, after)
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
