//! UI state (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod scroll;

// Re-export for convenience
pub use app_state::{AppState, ItemCounter};
pub use scroll::{extent_to_rows, TerminalScrollSink};
