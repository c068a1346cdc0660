//! Scroll-when-needed widget.
//!
//! Measures its content against the area it is given, feeds both heights to
//! the controller, and renders from the sink configuration the controller
//! published, all within the same frame.

use crate::controller::SizeAwareScrollController;
use crate::state::scroll::{extent_to_rows, TerminalScrollSink};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

/// Container that scrolls only when its content overflows.
///
/// While the content fits, it is drawn inside a region at least
/// `minimum_content_extent` rows tall and vertically centered in that region.
/// When it overflows, it is drawn at the sink's scroll offset with a
/// scrollbar in the rightmost column.
#[derive(Debug, Clone)]
pub struct ScrollWhenNeeded<'a> {
    content: Text<'a>,
}

impl<'a> ScrollWhenNeeded<'a> {
    /// Wrap the content to be measured and displayed.
    pub fn new(content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Natural height of the content in rows.
    pub fn content_rows(&self) -> usize {
        self.content.height()
    }
}

impl StatefulWidget for ScrollWhenNeeded<'_> {
    type State = SizeAwareScrollController<TerminalScrollSink>;

    fn render(self, area: Rect, buf: &mut Buffer, controller: &mut Self::State) {
        let content_rows = self.content_rows();

        controller.sink_mut().set_viewport(area.height);
        controller.observe(content_rows as f64, f64::from(area.height));

        let sink = controller.sink();
        let config = sink.config();

        if config.scroll_enabled {
            render_scrolling(self.content, area, buf, sink);
        } else {
            let region_rows = extent_to_rows(config.minimum_content_extent);
            render_fixed(self.content, content_rows, region_rows, area, buf);
        }
    }
}

/// Draw content that fits: inside a region of `region_rows`, centered.
fn render_fixed(
    content: Text<'_>,
    content_rows: usize,
    region_rows: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let region_rows = region_rows.min(usize::from(area.height));
    let top_padding = region_rows.saturating_sub(content_rows) / 2;
    let visible_rows = content_rows.min(region_rows - top_padding);

    // Both values are bounded by area.height, a u16
    let target = Rect {
        x: area.x,
        y: area.y + top_padding as u16,
        width: area.width,
        height: visible_rows as u16,
    };
    Paragraph::new(content).render(target, buf);
}

/// Draw overflowing content at the sink's offset, with indicators if enabled.
fn render_scrolling(content: Text<'_>, area: Rect, buf: &mut Buffer, sink: &TerminalScrollSink) {
    let config = sink.config();
    let offset = u16::try_from(sink.offset()).unwrap_or(u16::MAX);

    let content_area = if config.shows_scroll_indicators && area.width > 1 {
        Rect {
            width: area.width - 1,
            ..area
        }
    } else {
        area
    };

    Paragraph::new(content)
        .scroll((offset, 0))
        .render(content_area, buf);

    if config.shows_scroll_indicators {
        let mut scrollbar_state = ScrollbarState::new(sink.max_offset() + 1)
            .position(sink.offset())
            .viewport_content_length(usize::from(area.height));
        Scrollbar::new(ScrollbarOrientation::VerticalRight).render(area, buf, &mut scrollbar_state);
    }
}
