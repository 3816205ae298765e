//! Clickable list builder: rendered lines paired with their click actions.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// Lines for a `Paragraph`, some of which are buttons.
///
/// Push lines in display order, marking buttons with
/// [`push_clickable`](ClickableList::push_clickable); then
/// [`register_targets`](ClickableList::register_targets) maps each button to
/// the screen row it lands on, so inserting a line above a button can never
/// leave its tap target behind.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Upgrades"));
/// cl.push_clickable(Line::from(" [1] Auto-snow (0) - 10 ❄"), BUY_AUTO_SNOW);
/// cl.register_targets(area, &mut cs, 1, 1);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a plain line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a button line bound to `action_id`.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register one row target per button. `top_offset`/`bottom_offset` are
    /// the rows taken by borders; buttons past the bottom are clipped.
    /// Lines are assumed not to wrap.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}
