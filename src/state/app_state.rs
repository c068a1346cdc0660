//! Application state and transitions for the demonstration app.
//!
//! AppState holds the demo content model (the item stepper) and the
//! controller that decides whether that content scrolls. Key handling is a
//! pure transition over this state; the view only renders it.

use crate::config::ResolvedConfig;
use crate::controller::SizeAwareScrollController;
use crate::diagnostics::DiagnosticSink;
use crate::model::KeyAction;
use crate::state::scroll::TerminalScrollSink;

/// Stepper over `0..=max`, like the demo's item counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCounter {
    count: usize,
    max: usize,
}

impl ItemCounter {
    /// Create a counter, clamping `count` into `0..=max`.
    pub fn new(count: usize, max: usize) -> Self {
        Self {
            count: count.min(max),
            max,
        }
    }

    /// Current count.
    pub fn get(&self) -> usize {
        self.count
    }

    /// Upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Add one, up to `max`. Returns whether the count changed.
    pub fn increment(&mut self) -> bool {
        if self.count < self.max {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Remove one, down to zero. Returns whether the count changed.
    pub fn decrement(&mut self) -> bool {
        if self.count > 0 {
            self.count -= 1;
            true
        } else {
            false
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct AppState {
    /// Demo item stepper.
    pub items: ItemCounter,
    /// Scroll decision for the content area.
    pub scroll: SizeAwareScrollController<TerminalScrollSink>,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create state from resolved configuration.
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            items: ItemCounter::new(config.initial_item_count, config.max_item_count),
            scroll: SizeAwareScrollController::new(TerminalScrollSink::new())
                .with_centering(config.center_content_vertically),
            should_quit: false,
        }
    }

    /// Attach diagnostics to the scroll controller.
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        self.scroll = self.scroll.with_diagnostics(diagnostics);
        self
    }

    /// Apply a user action.
    ///
    /// Scroll actions are forwarded to the terminal sink, which ignores them
    /// while the content fits. Content changes take effect on the next render,
    /// when the content is measured again.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::ScrollUp => self.scroll.sink_mut().scroll_up(1),
            KeyAction::ScrollDown => self.scroll.sink_mut().scroll_down(1),
            KeyAction::PageUp => self.scroll.sink_mut().page_up(),
            KeyAction::PageDown => self.scroll.sink_mut().page_down(),
            KeyAction::ScrollToTop => self.scroll.sink_mut().scroll_to_top(),
            KeyAction::ScrollToBottom => self.scroll.sink_mut().scroll_to_bottom(),
            KeyAction::IncrementItems => {
                self.items.increment();
            }
            KeyAction::DecrementItems => {
                self.items.decrement();
            }
            KeyAction::ToggleCentering => {
                let center = !self.scroll.centers_content();
                self.scroll.set_centering(center);
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }
}
