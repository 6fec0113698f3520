use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;
use crate::intent::Confidence;

const LABEL_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const DIM_STYLE: Style = Style::new().fg(Color::Indexed(245));

/// Lines shown in the intent panel, without styling.
pub fn panel_lines(model: &Model) -> [String; 4] {
    let phrase = format!("PHRASE: {}", model.phrase_display);
    let Some(intent) = &model.last_intent else {
        return [
            phrase,
            "INTENT: -".to_string(),
            "because: -".to_string(),
            "preview: -".to_string(),
        ];
    };
    [
        phrase,
        format!("INTENT: {}", intent.summary()),
        format!("because: {}", intent.reasons().join(", ")),
        format!("preview: {}", intent.preview()),
    ]
}

const fn confidence_color(confidence: Confidence) -> Color {
    match confidence {
        Confidence::High => Color::Green,
        Confidence::Medium => Color::Yellow,
        Confidence::Low => Color::Red,
    }
}

pub fn render_intent_panel(model: &Model, frame: &mut Frame, area: Rect) {
    let lines = panel_lines(model);
    let value_style = model
        .last_intent
        .as_ref()
        .map_or(DIM_STYLE, |intent| {
            Style::default().fg(confidence_color(intent.confidence()))
        });

    let styled: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let (label, value) = text.split_once(": ").unwrap_or((text.as_str(), ""));
            let style = if idx == 0 { Style::default() } else { value_style };
            Line::from(vec![
                Span::styled(format!("{label}: "), LABEL_STYLE),
                Span::styled(value.to_string(), style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Intent ")
        .borders(Borders::TOP)
        .border_style(DIM_STYLE);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(styled).block(block), area);
}
