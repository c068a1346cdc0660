//! TUI rendering and terminal management (impure shell)

mod layout;
pub mod scroll_view;

pub use layout::{demo_content, render_app, split_screen, status_line, ScreenAreas, TITLE};
pub use scroll_view::ScrollWhenNeeded;

use crate::config::KeyBindings;
use crate::controller::{MeasurementQueue, MeasurementSender};
use crate::model::{KeyAction, Measurement};
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Size changes reported outside a render, applied before the next one
    measurements: MeasurementQueue,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, key_bindings: KeyBindings) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, key_bindings))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal (any backend).
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, key_bindings: KeyBindings) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            measurements: MeasurementQueue::new(),
        }
    }

    /// Sender for size changes observed outside the render pass.
    pub fn measurement_sender(&self) -> MeasurementSender {
        self.measurements.sender()
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal, e.g. to inspect a `TestBackend` buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Returns when user quits. Redraws only after an input or resize event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                // Measurements may still arrive from other threads
                if self.app_state.scroll.drain(&self.measurements).is_some() {
                    self.draw()?;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }

            self.draw()?;
        }
    }

    /// Handle a key event. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "Unbound key");
            return false;
        };

        debug!(?action, "Key action");
        self.app_state.handle_action(action);
        action == KeyAction::Quit || self.app_state.should_quit
    }

    /// Report a terminal resize as a container-only measurement.
    ///
    /// The content is re-measured during the next render; until then the
    /// controller decides against its cached content height.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let areas = split_screen(Rect::new(0, 0, width, height));
        debug!(width, height, container = areas.content.height, "Terminal resized");
        self.measurements
            .sender()
            .submit(Measurement::container(f64::from(areas.content.height)));
    }

    /// Apply queued measurements, then render the current frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.app_state.scroll.drain(&self.measurements);

        let app_state = &mut self.app_state;
        self.terminal.draw(|frame| render_app(frame, app_state))?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Mutable terminal access, e.g. to resize a `TestBackend`.
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even if the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, key_bindings: KeyBindings) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, key_bindings)?;
    info!("TUI started");

    let result = app.run();

    restore_terminal()?;
    info!("TUI stopped");

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
