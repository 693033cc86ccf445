use crate::state::{AppState, NavigationDirection, ScreenId};
use imagene_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Glyph hinting which way the last transition went
pub fn transition_arrow(direction: NavigationDirection) -> &'static str {
    match direction {
        NavigationDirection::Forwards => "▶",
        NavigationDirection::Backwards => "◀",
    }
}

/// Screen history from the first screen to the current one
pub fn breadcrumb(state: &AppState) -> String {
    let mut screens = state.navigation.screens();
    screens.reverse();
    screens
        .iter()
        .map(|screen| screen.title())
        .collect::<Vec<_>>()
        .join(" › ")
}

pub fn render_header(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let line = Line::from(vec![
        Span::styled(" Imagene ", theme.panel_title()),
        Span::styled(
            format!("{} ", transition_arrow(state.navigation.direction())),
            theme.key_hint(),
        ),
        Span::styled(breadcrumb(state), theme.muted()),
    ]);
    f.render_widget(Paragraph::new(line).style(theme.base()), area);
}

/// Key hints for the current screen
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints = match state.current_screen() {
        ScreenId::Welcome | ScreenId::Information => vec![("Enter", "continue"), ("t", "theme")],
        ScreenId::Population => vec![("Tab", "next field"), ("Ctrl+T", "theme")],
    };
    if state.navigation.can_go_back() {
        hints.push(("Esc", "back"));
    } else {
        hints.push(("Esc", "quit"));
    }
    hints
}

pub fn render_footer(state: &AppState, theme: &Theme, area: Rect, f: &mut Frame) {
    let spans: Vec<Span> = key_hints(state)
        .into_iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {} ", key), theme.key_hint()),
                Span::styled(format!("{}  ", description), theme.muted()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
}
