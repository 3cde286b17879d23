pub mod components;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, ViewState};

/// Heading shown above the record cards once they have loaded.
pub const HEADING: &str = "User Management";

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let p = Paragraph::new(format!(
        "userview  [{}]  — Up/Down: scroll; PgUp/PgDn: page; q: quit",
        app.endpoint
    ))
    .block(
        Block::default()
            .title("userview")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    // The three body states are mutually exclusive.
    if matches!(app.view, ViewState::Loading) {
        components::render_loading(f, root[1], app);
    } else if matches!(app.view, ViewState::Error(_)) {
        components::render_error(f, root[1], app);
    } else {
        users::render_user_cards(f, root[1], app);
    }

    components::render_status_bar(f, root[2], app);
}
