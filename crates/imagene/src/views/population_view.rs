use crate::state::{SettingsField, SettingsState};
use imagene_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use strum::IntoEnumIterator;

pub fn render(settings: &SettingsState, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = Vec::new();

    for field in SettingsField::iter() {
        let focused = field == settings.focused_field;
        let marker = if focused { "›" } else { " " };
        let value_style = if focused {
            theme.selected()
        } else {
            theme.text()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} {:<16}", marker, field), theme.text()),
            Span::styled(format!(" {:>8} ", settings.value(field)), value_style),
        ]));
        lines.push(Line::from(""));
    }

    if let Err(e) = settings.validate() {
        lines.push(Line::from(Span::styled(format!("⚠ {}", e), theme.warning())));
    }

    f.render_widget(Paragraph::new(lines), area);
}
