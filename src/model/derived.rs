//! Derived scroll decision and the measurements that feed it.

use super::height::{ContainerHeight, ContentHeight};

/// Scroll decision derived from the latest measurements.
///
/// Recomputed from scratch on every measurement; never patched in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedState {
    /// Minimum height the content region must occupy.
    ///
    /// Always either the container height (short content stretched to fill)
    /// or the natural content height. Never an interpolation.
    pub effective_content_height: f64,
    /// Whether the container must scroll to show all content.
    pub should_scroll: bool,
}

impl DerivedState {
    /// State published before the first measurement arrives.
    pub const INITIAL: Self = Self {
        effective_content_height: 0.0,
        should_scroll: false,
    };
}

impl Default for DerivedState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// A single size-change notification from the measurement source.
///
/// Sources that only learn about one dimension at a time (a resize event,
/// a content mutation) send a partial measurement; the controller keeps the
/// last known value of the other dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Both dimensions were measured together.
    Both {
        /// Natural height of the content.
        content: ContentHeight,
        /// Height available to the content.
        container: ContainerHeight,
    },
    /// Only the content changed.
    Content(ContentHeight),
    /// Only the container changed.
    Container(ContainerHeight),
}

impl Measurement {
    /// Build a full measurement from raw layout values.
    pub fn both(content: f64, container: f64) -> Self {
        Self::Both {
            content: ContentHeight::new(content),
            container: ContainerHeight::new(container),
        }
    }

    /// Build a content-only measurement from a raw layout value.
    pub fn content(height: f64) -> Self {
        Self::Content(ContentHeight::new(height))
    }

    /// Build a container-only measurement from a raw layout value.
    pub fn container(height: f64) -> Self {
        Self::Container(ContainerHeight::new(height))
    }

    /// Merge this measurement with the last known heights.
    pub fn resolve(
        self,
        last_content: ContentHeight,
        last_container: ContainerHeight,
    ) -> (ContentHeight, ContainerHeight) {
        match self {
            Self::Both { content, container } => (content, container),
            Self::Content(content) => (content, last_container),
            Self::Container(container) => (last_content, container),
        }
    }
}
