use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

use crate::app::{AppState, Config, KeyAction};
use crate::ui;

/// Draw/poll loop for one activation. Returns when the quit key is pressed;
/// the single fetch started by `AppState::new` resolves while the loop runs.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: &Config,
) -> Result<()> {
    let mut app = AppState::new(config);

    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        app.poll_fetch();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.keymap.resolve(&key) {
                        Some(KeyAction::Quit) => break,
                        Some(KeyAction::MoveUp) => app.scroll_by(-1),
                        Some(KeyAction::MoveDown) => app.scroll_by(1),
                        Some(KeyAction::PageUp) => {
                            app.scroll_by(-(app.viewport_rows.max(1) as isize));
                        }
                        Some(KeyAction::PageDown) => {
                            app.scroll_by(app.viewport_rows.max(1) as isize);
                        }
                        Some(KeyAction::GoTop) => app.scroll = 0,
                        Some(KeyAction::GoBottom) => app.scroll = app.max_scroll(),
                        Some(KeyAction::Ignore) | None => {}
                    }
                }
            }
        }
    }

    Ok(())
}
