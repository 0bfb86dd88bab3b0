//! Narration history pane

use super::border_style;
use crate::snapshot::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render narration for every step up to and including `position`.
///
/// `scroll_offset` is clamped here; `usize::MAX` pins the view to the
/// current step.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = trace
        .iter()
        .take(position + 1)
        .map(|step| {
            let current = step.index == position;
            let text_style = if current {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4} ", step.index + 1),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(step.narration.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
