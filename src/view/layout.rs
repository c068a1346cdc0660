//! Screen layout for the demonstration app.
//!
//! Header on top, the scroll-when-needed content area in the middle, a
//! one-line status bar at the bottom.

use crate::state::{AppState, ItemCounter};
use crate::view::scroll_view::ScrollWhenNeeded;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

/// Title shown in the header bar.
pub const TITLE: &str = "Scroll When Needed";

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar (1 line)
    pub header: Rect,
    /// Measured, possibly scrolling content
    pub content: Rect,
    /// Status bar (1 line)
    pub status: Rect,
}

/// Split the frame into header, content and status areas.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let [header, content, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        content,
        status,
    }
}

/// Demonstration content: a stepper line followed by the items.
///
/// Every line is followed by a blank padding row, so the natural height is
/// `2 * (items + 1)` rows.
pub fn demo_content(items: &ItemCounter) -> Text<'static> {
    let mut lines = Vec::with_capacity(2 * (items.get() + 1));

    lines.push(
        Line::from(vec![
            Span::raw(format!("Number of Items: {}", items.get())),
            Span::styled("   [-] [+]", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    );
    lines.push(Line::default());

    for index in 0..items.get() {
        lines.push(Line::from(format!("Item {}", index)).centered());
        lines.push(Line::default());
    }

    Text::from(lines)
}

/// Render one frame of the demo.
pub fn render_app(frame: &mut Frame, state: &mut AppState) {
    let areas = split_screen(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(TITLE).centered())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        areas.header,
    );

    let content = demo_content(&state.items);
    frame.render_stateful_widget(ScrollWhenNeeded::new(content), areas.content, &mut state.scroll);

    frame.render_widget(Paragraph::new(status_line(state)), areas.status);
}

/// Status bar text reflecting the latest decision.
pub fn status_line(state: &AppState) -> Line<'static> {
    let derived = state.scroll.state();
    let scroll = if derived.should_scroll { "on" } else { "off" };
    let centered = if state.scroll.centers_content() {
        "yes"
    } else {
        "no"
    };

    Line::from(vec![
        Span::styled(
            format!(
                " items {}/{} | scroll {} | centered {} | extent {:.0} ",
                state.items.get(),
                state.items.max(),
                scroll,
                centered,
                derived.effective_content_height
            ),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " +/- items  c center  j/k scroll  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
