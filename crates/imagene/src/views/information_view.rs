use imagene_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const PARAGRAPHS: [&str; 3] = [
    "Each image is drawn by a function: an expression tree over the pixel coordinates.",
    "A generation is a population of such functions. You pick the ones you like and \
     they breed the next generation.",
    "Next you choose how many functions make up a generation and how deep their \
     expression trees may grow.",
];

pub fn render(theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = Vec::new();
    for paragraph in PARAGRAPHS {
        lines.push(Line::from(Span::styled(paragraph, theme.text())));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" continue  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" back", theme.muted()),
    ]));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
