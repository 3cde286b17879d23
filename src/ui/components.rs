//! Shared UI components (status bar, loading/error bodies).
//!
//! Small building blocks used by the root renderer.
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::app::{AppState, ViewState};

/// Render the loading indicator body: a single fixed line, nothing else.
pub fn render_loading(f: &mut Frame, area: Rect, app: &AppState) {
    let p = Paragraph::new("Loading...").style(Style::default().fg(app.theme.text));
    f.render_widget(p, area);
}

/// Render the error body: a single fixed-format line, nothing else.
pub fn render_error(f: &mut Frame, area: Rect, app: &AppState) {
    let msg = match &app.view {
        ViewState::Error(msg) => msg.as_str(),
        _ => return,
    };
    let p = Paragraph::new(format!("Error: {msg}")).style(Style::default().fg(app.theme.error_fg));
    f.render_widget(p, area);
}

/// Render the bottom status bar with state and record count.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let state = match &app.view {
        ViewState::Loading => "loading",
        ViewState::Error(_) => "error",
        ViewState::Loaded(_) => "loaded",
    };
    let msg = format!(
        "state: {state}  records:{}  endpoint:{}",
        app.record_count(),
        app.endpoint
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}
