//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling (ignored while the content fits)
    /// Scroll content up by one row. Default: k/↑
    ScrollUp,
    /// Scroll content down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the content. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the content. Default: G/End
    ScrollToBottom,

    // Demonstration content
    /// Add one item, up to the configured maximum. Default: +/=
    IncrementItems,
    /// Remove one item, down to zero. Default: -
    DecrementItems,
    /// Toggle vertical centering of short content. Default: c
    ToggleCentering,

    // Application
    /// Quit. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves the scroll position.
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }
}
