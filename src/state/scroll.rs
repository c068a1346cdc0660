//! Terminal scroll region state.
//!
//! The terminal-side implementation of [`ScrollSink`]: it remembers the last
//! configuration published by the controller and owns the row offset that
//! user scroll input moves. Pure state; rendering lives in `view`.

use crate::sink::{ScrollSink, SinkConfig};

/// Scrollable region of a terminal, driven by the controller.
///
/// # Invariants
/// - `offset == 0` whenever scrolling is disabled
/// - `offset <= max_offset()` after every configure or scroll request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalScrollSink {
    config: SinkConfig,
    offset: usize,
    viewport_rows: u16,
}

impl TerminalScrollSink {
    /// Create a sink with scrolling disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last configuration received from the controller.
    pub fn config(&self) -> SinkConfig {
        self.config
    }

    /// Current row offset from the top of the content.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows visible in the region.
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Record the height of the region the content is drawn into.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.clamp_offset();
    }

    /// Content rows implied by the minimum extent.
    pub fn content_rows(&self) -> usize {
        extent_to_rows(self.config.minimum_content_extent)
    }

    /// Largest reachable offset. Zero while scrolling is disabled.
    pub fn max_offset(&self) -> usize {
        if !self.config.scroll_enabled {
            return 0;
        }
        self.content_rows()
            .saturating_sub(usize::from(self.viewport_rows))
    }

    /// Scroll down by `rows`. Ignored while scrolling is disabled.
    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows);
        self.clamp_offset();
    }

    /// Scroll up by `rows`. Ignored while scrolling is disabled.
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
        self.clamp_offset();
    }

    /// Scroll down one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(usize::from(self.viewport_rows.max(1)));
    }

    /// Scroll up one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(usize::from(self.viewport_rows.max(1)));
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last content row is at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

impl ScrollSink for TerminalScrollSink {
    fn configure(&mut self, config: SinkConfig) {
        self.config = config;
        self.clamp_offset();
    }
}

/// Convert a layout extent to whole terminal rows.
///
/// Rounds to the nearest row so sub-row noise never adds a phantom line.
pub fn extent_to_rows(extent: f64) -> usize {
    if extent.is_finite() && extent > 0.0 {
        extent.round() as usize
    } else {
        0
    }
}
