//! Optional diagnostic tracing of measurement decisions.
//!
//! The controller never logs on its own. Hosts that want a trace of every
//! measurement inject a [`DiagnosticSink`]; without one, decisions are silent.

use crate::model::{ContainerHeight, ContentHeight, DerivedState};
use std::sync::mpsc::Sender;

/// One traced decision: the inputs that were observed and what was derived.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    /// When the decision was made
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Content height the decision used
    pub content: ContentHeight,
    /// Container height the decision used
    pub container: ContainerHeight,
    /// Resulting state
    pub state: DerivedState,
}

/// Receiver for per-measurement diagnostics.
pub trait DiagnosticSink {
    /// Called once per applied measurement, after the decision is made.
    fn record(&self, content: ContentHeight, container: ContainerHeight, state: DerivedState);
}

/// Emits each decision as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, content: ContentHeight, container: ContainerHeight, state: DerivedState) {
        tracing::debug!(
            target: "scroll_when_needed::controller",
            content_height = content.get(),
            container_height = container.get(),
            effective_content_height = state.effective_content_height,
            should_scroll = state.should_scroll,
            "Content Height: {}; Container Height: {}",
            content.get(),
            container.get()
        );
    }
}

/// Forwards each decision over a channel.
///
/// A dropped receiver is ignored: diagnostics must never break rendering.
#[derive(Debug, Clone)]
pub struct ChannelDiagnostics {
    sender: Sender<DiagnosticRecord>,
}

impl ChannelDiagnostics {
    /// Create a sink that sends records to `sender`.
    pub fn new(sender: Sender<DiagnosticRecord>) -> Self {
        Self { sender }
    }
}

impl DiagnosticSink for ChannelDiagnostics {
    fn record(&self, content: ContentHeight, container: ContainerHeight, state: DerivedState) {
        let _ = self.sender.send(DiagnosticRecord {
            timestamp: chrono::Utc::now(),
            content,
            container,
            state,
        });
    }
}
