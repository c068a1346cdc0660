//! Scroll When Needed
//!
//! A container that measures its content against the space available to it
//! and enables vertical scrolling only when the content overflows. Short
//! content can instead be stretched to fill the container and centered.
//!
//! The decision lives in the pure core ([`controller`], [`model`], [`sink`]);
//! the terminal widget and demonstration app form the impure shell
//! ([`view`], [`state`], [`config`], [`logging`]).

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod logging;
pub mod model;
pub mod sink;
pub mod state;
pub mod view;

pub use controller::{decide, MeasurementQueue, MeasurementSender, SizeAwareScrollController};
pub use model::{ContainerHeight, ContentHeight, DerivedState, Measurement, Tolerance};
pub use sink::{RecordingSink, ScrollSink, SinkConfig};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
