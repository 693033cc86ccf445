use imagene_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled("What is Imagene?", theme.panel_title())),
        Line::from(""),
        Line::from(Span::styled(
            "An application that generates interesting imagery through the use of \
             Darwin's theory of evolution.",
            theme.text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", theme.muted()),
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" to continue", theme.muted()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
