//! Measure-and-decide core.
//!
//! Turns a stream of (content height, container height) observations into
//! a stream of [`DerivedState`] values and publishes each one to a
//! [`ScrollSink`]. The decision itself is the pure [`decide`] function; the
//! controller only caches the last known heights and forwards results.

mod queue;

pub use queue::{MeasurementQueue, MeasurementSender};

use crate::diagnostics::DiagnosticSink;
use crate::model::{ContainerHeight, ContentHeight, DerivedState, Measurement, Tolerance};
use crate::sink::{ScrollSink, SinkConfig};

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

/// Derive the scroll decision for one pair of measurements.
///
/// 1. With centering on, content that is shorter than the container or equal
///    to it within `tolerance` is stretched to the container height.
/// 2. Otherwise the content keeps its natural height.
/// 3. Scrolling is needed when the effective height exceeds the container by
///    more than `tolerance`.
///
/// A container shorter than `tolerance` has not been laid out yet: nothing is
/// stretched against it and scrolling stays off until a real height arrives.
pub fn decide(
    content: ContentHeight,
    container: ContainerHeight,
    tolerance: Tolerance,
    center_content_vertically: bool,
) -> DerivedState {
    let content = content.get();
    let container = container.get();

    if container < tolerance.get() {
        return DerivedState {
            effective_content_height: content,
            should_scroll: false,
        };
    }

    let fills_container = content < container || tolerance.approx_eq(content, container);
    let effective_content_height = if center_content_vertically && fills_container {
        container
    } else {
        content
    };

    DerivedState {
        effective_content_height,
        should_scroll: tolerance.exceeds(effective_content_height, container),
    }
}

/// Holds the latest measurements and republishes the derived scroll state.
///
/// Generic over the sink so hosts can drive a terminal region, a recording
/// sink in tests, or any other scrollable container.
pub struct SizeAwareScrollController<S> {
    sink: S,
    center_content_vertically: bool,
    tolerance: Tolerance,
    content: ContentHeight,
    container: ContainerHeight,
    state: DerivedState,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl<S: ScrollSink> SizeAwareScrollController<S> {
    /// Create a controller with vertical centering enabled.
    ///
    /// The sink is not configured until the first measurement arrives.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            center_content_vertically: true,
            tolerance: Tolerance::DEFAULT,
            content: ContentHeight::ZERO,
            container: ContainerHeight::ZERO,
            state: DerivedState::INITIAL,
            diagnostics: None,
        }
    }

    /// Set whether short content is stretched to fill the container.
    pub fn with_centering(mut self, center_content_vertically: bool) -> Self {
        self.center_content_vertically = center_content_vertically;
        self
    }

    /// Attach a diagnostic sink that sees every applied measurement.
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Observe a full measurement and publish the derived state.
    ///
    /// Negative inputs are clamped to zero. Repeating the same call yields
    /// the same state and republishes it.
    pub fn observe(&mut self, content_height: f64, container_height: f64) -> DerivedState {
        self.apply(Measurement::both(content_height, container_height))
    }

    /// Apply a full or partial measurement and publish the derived state.
    ///
    /// A partial measurement keeps the cached value of the other dimension.
    pub fn apply(&mut self, measurement: Measurement) -> DerivedState {
        let (content, container) = measurement.resolve(self.content, self.container);
        self.content = content;
        self.container = container;
        self.state = decide(
            content,
            container,
            self.tolerance,
            self.center_content_vertically,
        );

        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(content, container, self.state);
        }
        self.sink.configure(SinkConfig::from(self.state));

        self.state
    }

    /// Apply every measurement waiting in `queue`, oldest first.
    ///
    /// Returns the state after the last one, or `None` if the queue was empty.
    pub fn drain(&mut self, queue: &MeasurementQueue) -> Option<DerivedState> {
        let mut latest = None;
        while let Some(measurement) = queue.try_next() {
            latest = Some(self.apply(measurement));
        }
        latest
    }

    /// Change the centering preference and re-derive from cached heights.
    ///
    /// The host owns this preference; the controller only recomputes when it
    /// changes so the sink never shows a stale minimum extent.
    pub fn set_centering(&mut self, center_content_vertically: bool) -> DerivedState {
        self.center_content_vertically = center_content_vertically;
        self.apply(Measurement::Both {
            content: self.content,
            container: self.container,
        })
    }
}

impl<S> SizeAwareScrollController<S> {
    /// Latest derived state.
    pub fn state(&self) -> DerivedState {
        self.state
    }

    /// Last known natural content height.
    pub fn content_height(&self) -> ContentHeight {
        self.content
    }

    /// Last known container height.
    pub fn container_height(&self) -> ContainerHeight {
        self.container
    }

    /// Whether short content is stretched to fill the container.
    pub fn centers_content(&self) -> bool {
        self.center_content_vertically
    }

    /// Tolerance used for every comparison.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink, e.g. to forward user scroll input.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for SizeAwareScrollController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeAwareScrollController")
            .field("sink", &self.sink)
            .field("center_content_vertically", &self.center_content_vertically)
            .field("tolerance", &self.tolerance)
            .field("content", &self.content)
            .field("container", &self.container)
            .field("state", &self.state)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}
