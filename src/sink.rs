//! Contract between the controller and the scrollable container it drives.

use crate::model::DerivedState;

/// Configuration pushed to the scrollable container after every decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    /// Whether the user may scroll the content.
    pub scroll_enabled: bool,
    /// Whether scroll indicators (scrollbars) are drawn.
    pub shows_scroll_indicators: bool,
    /// Minimum height the content region must occupy.
    pub minimum_content_extent: f64,
}

impl From<DerivedState> for SinkConfig {
    fn from(state: DerivedState) -> Self {
        Self {
            scroll_enabled: state.should_scroll,
            shows_scroll_indicators: state.should_scroll,
            minimum_content_extent: state.effective_content_height,
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        DerivedState::INITIAL.into()
    }
}

/// A vertically scrollable container that can be reconfigured by the controller.
///
/// Implementations render the content inside a scrolling region when
/// `scroll_enabled` is set, or inside a fixed region at least
/// `minimum_content_extent` tall otherwise.
pub trait ScrollSink {
    /// Apply a new configuration. Called once per measurement, including
    /// duplicate measurements; implementations must be idempotent.
    fn configure(&mut self, config: SinkConfig);
}

impl<S: ScrollSink + ?Sized> ScrollSink for &mut S {
    fn configure(&mut self, config: SinkConfig) {
        (**self).configure(config);
    }
}

impl<S: ScrollSink + ?Sized> ScrollSink for Box<S> {
    fn configure(&mut self, config: SinkConfig) {
        (**self).configure(config);
    }
}

/// Sink that remembers every configuration it received.
///
/// Useful for hosts that read the decision back instead of reacting to it,
/// and for asserting on the published sequence in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    history: Vec<SinkConfig>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All configurations received, oldest first.
    pub fn history(&self) -> &[SinkConfig] {
        &self.history
    }

    /// Most recent configuration, if any was published.
    pub fn last(&self) -> Option<SinkConfig> {
        self.history.last().copied()
    }
}

impl ScrollSink for RecordingSink {
    fn configure(&mut self, config: SinkConfig) {
        self.history.push(config);
    }
}
