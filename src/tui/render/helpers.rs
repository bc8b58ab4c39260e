use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::app::{BoardLayout, PopupButton};
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Rectangle of a fixed size centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// One row of clickable `[label]` buttons.
///
/// Spans are laid out left to right from a one-cell indent; `place` records
/// each button's cells once the row's screen position is known.
pub(super) struct ButtonRow {
    spans: Vec<Span<'static>>,
    buttons: Vec<(u16, u16, PopupButton)>,
}

impl ButtonRow {
    pub fn new(style: Style) -> Self {
        ButtonRow {
            spans: vec![Span::styled(" ", style)],
            buttons: Vec::new(),
        }
    }

    pub fn button(mut self, label: &str, action: PopupButton, style: Style, gap: Style) -> Self {
        if !self.buttons.is_empty() {
            self.spans.push(Span::styled("  ", gap));
        }
        let text = format!("[{label}]");
        let x = spans_width(&self.spans) as u16;
        let width = unicode::display_width(&text) as u16;
        self.spans.push(Span::styled(text, style));
        self.buttons.push((x, width, action));
        self
    }

    /// Record hit regions for a row drawn at (`inner.x`, `y`)
    pub fn place(&self, layout: &mut BoardLayout, inner: Rect, y: u16) {
        for &(dx, width, action) in &self.buttons {
            let x = inner.x.saturating_add(dx);
            if x >= inner.right() || y >= inner.bottom() {
                continue;
            }
            let width = width.min(inner.right() - x);
            layout.buttons.push((Rect::new(x, y, width, 1), action));
        }
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(self.spans.clone())
    }
}
