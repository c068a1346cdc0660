//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating user
//! interactions and reading back what was drawn.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::state::AppState;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to one string per row, trailing spaces trimmed.
///
/// Blank rows are kept so vertical placement can be asserted.
pub fn buffer_to_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the demo with default config in a terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, &ResolvedConfig::default())
    }

    /// Start the demo with explicit config.
    pub fn with_config(width: u16, height: u16, config: &ResolvedConfig) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let app = TuiApp::with_terminal(terminal, AppState::new(config), KeyBindings::default());

        let mut harness = Self { app, running: true };
        harness.render();
        harness
    }

    /// Send a key, then render like the event loop does.
    ///
    /// Returns `true` if the app quit as a result.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        if !self.running {
            return true;
        }

        let quit = self
            .app
            .handle_key(KeyEvent::new(key, KeyModifiers::NONE));
        if quit {
            self.running = false;
        } else {
            self.render();
        }
        quit
    }

    /// Send the same key `times` times.
    pub fn repeat_key(&mut self, key: KeyCode, times: usize) {
        for _ in 0..times {
            if self.send_key(key) {
                break;
            }
        }
    }

    /// Resize the terminal, then render like the event loop does.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.handle_resize(width, height);
        self.app
            .terminal_mut()
            .backend_mut()
            .resize(width, height);
        self.render();
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Rows of the last rendered frame.
    pub fn screen(&self) -> Vec<String> {
        buffer_to_lines(self.app.terminal().backend().buffer())
    }

    fn render(&mut self) {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
    }
}
