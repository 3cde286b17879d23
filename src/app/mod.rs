//! Application state types and entry glue.
//!
//! Defines the three-way view state, the per-activation `AppState`, and the
//! runtime `Config` resolved from the command line. The event loop itself
//! lives in `update` (re-exported as `run`).
//!
pub mod keymap;
pub mod theme;
pub mod update;

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::api::{self, FetchOutcome, UserDirectory, UserRecord};

pub use keymap::{KeyAction, Keymap};
pub use theme::Theme;

/// User-visible message for any fetch failure. Network-level failures and
/// non-success HTTP statuses are deliberately not distinguished.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch users";

/// The three mutually exclusive render states of the view.
#[derive(Clone, Debug)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<UserRecord>),
}

/// Runtime options resolved from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub theme_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: api::DEFAULT_ENDPOINT.to_string(),
            theme_path: "theme.conf".to_string(),
        }
    }
}

pub struct AppState {
    pub endpoint: String,
    pub view: ViewState,
    /// First body line shown when the record list overflows the viewport.
    pub scroll: usize,
    /// Total number of card lines, refreshed during render.
    pub content_rows: usize,
    /// Body height in rows, refreshed during render.
    pub viewport_rows: usize,
    pub theme: Theme,
    pub keymap: Keymap,
    /// Pending fetch outcome; `None` once the outcome has been applied.
    pub fetch_rx: Option<Receiver<FetchOutcome>>,
}

impl AppState {
    /// Create the state for one activation: start in `Loading` and issue the
    /// single fetch of `config.endpoint`.
    pub fn new(config: &Config) -> Self {
        Self::with_directory(config, api::HttpUserDirectory::new(&config.endpoint))
    }

    /// Like [`AppState::new`] but fetching from a caller-supplied source.
    pub fn with_directory<D>(config: &Config, directory: D) -> Self
    where
        D: UserDirectory + Send + 'static,
    {
        Self {
            endpoint: config.endpoint.clone(),
            view: ViewState::Loading,
            scroll: 0,
            content_rows: 0,
            viewport_rows: 0,
            theme: Theme::load_or_init(&config.theme_path),
            keymap: Keymap::load_or_init("keybinds.conf"),
            fetch_rx: Some(api::spawn_fetch(directory)),
        }
    }

    /// Apply a pending fetch outcome if one has arrived. The transition out
    /// of `Loading` happens at most once per activation; anything delivered
    /// after that is dropped together with the channel.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                if let ViewState::Loading = self.view {
                    self.view = match outcome {
                        FetchOutcome::Loaded(users) => ViewState::Loaded(users),
                        FetchOutcome::Failed(_) => {
                            ViewState::Error(FETCH_ERROR_MESSAGE.to_string())
                        }
                    };
                }
                self.fetch_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting an outcome.
                if let ViewState::Loading = self.view {
                    self.view = ViewState::Error(FETCH_ERROR_MESSAGE.to_string());
                }
                self.fetch_rx = None;
            }
        }
    }

    pub fn record_count(&self) -> usize {
        match &self.view {
            ViewState::Loaded(users) => users.len(),
            _ => 0,
        }
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = self.scroll.saturating_add(delta as usize).min(self.max_scroll());
        }
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
