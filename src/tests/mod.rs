//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive the demo app through key
//! presses and resizes and assert on the rendered TestBackend buffer.
