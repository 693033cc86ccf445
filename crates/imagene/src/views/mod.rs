//! Terminal rendering of the wizard
//!
//! Views are pure consumers of [`AppState`]: the current screen picks the
//! body, the navigation direction picks the transition hint and the theme id
//! is resolved to a palette here.

use crate::state::{AppState, ScreenId};
use imagene_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

pub mod header;
pub mod information_view;
pub mod population_view;
pub mod welcome_view;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = Theme::from(state.theme);

    f.render_widget(Block::default().style(theme.base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(state, &theme, rows[0], f);

    let screen = state.current_screen();
    let panel_area = panel_area(rows[1]);
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(screen.title())
        .title_style(theme.panel_title())
        .style(theme.base());
    let inner = panel.inner(panel_area);
    f.render_widget(panel, panel_area);

    match screen {
        ScreenId::Welcome => welcome_view::render(&theme, inner, f),
        ScreenId::Information => information_view::render(&theme, inner, f),
        ScreenId::Population => population_view::render(&state.settings, &theme, inner, f),
    }

    header::render_footer(state, &theme, rows[2], f);
}

/// The middle three fifths of the body, where the screen panel lives
fn panel_area(area: Rect) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(3, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);
    columns[1]
}
