//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod derived;
pub mod error;
pub mod height;
pub mod key_action;

// Re-export for convenience
pub use derived::{DerivedState, Measurement};
pub use error::AppError;
pub use height::{ContainerHeight, ContentHeight, Tolerance};
pub use key_action::KeyAction;
