//! Auxiliary structure pane (merge buffer, search window, BFS queue, DFS stack)

use super::border_style;
use crate::snapshot::Auxiliary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_auxiliary_pane(frame: &mut Frame, area: Rect, auxiliary: Option<&Auxiliary>) {
    let title = match auxiliary {
        Some(Auxiliary::Buffer { .. }) => " Merge Buffer ",
        Some(Auxiliary::Bounds { .. }) => " Search Window ",
        Some(Auxiliary::Queue { .. }) => " Queue ",
        Some(Auxiliary::Stack { .. }) => " Stack ",
        None => " Auxiliary ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = Paragraph::new(auxiliary_lines(auxiliary))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn auxiliary_lines(auxiliary: Option<&Auxiliary>) -> Vec<Line<'static>> {
    let muted = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.number);
    let node = Style::default()
        .fg(DEFAULT_THEME.frontier)
        .add_modifier(Modifier::BOLD);

    match auxiliary {
        None => vec![Line::styled("(none at this step)", muted)],
        Some(Auxiliary::Buffer {
            offset,
            values,
            active,
        }) => {
            let read = Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(ratatui::style::Color::Black)
                .add_modifier(Modifier::BOLD);
            let cells = values
                .iter()
                .enumerate()
                .flat_map(|(i, v)| {
                    let style = if active.contains(&i) { read } else { value };
                    [Span::styled(format!(" {} ", v), style), Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            vec![
                Line::styled(format!("copied from index {}", offset), muted),
                Line::from(cells),
            ]
        }
        Some(Auxiliary::Bounds { low, high }) => vec![
            Line::from(vec![
                Span::styled("low  ", muted),
                Span::styled(low.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("high ", muted),
                Span::styled(high.to_string(), value),
            ]),
        ],
        Some(Auxiliary::Queue { nodes }) => frontier_lines("front → ", nodes, node, muted),
        Some(Auxiliary::Stack { nodes }) => {
            let top_first = nodes.iter().rev().cloned().collect::<Vec<_>>();
            frontier_lines("top → ", &top_first, node, muted)
        }
    }
}

fn frontier_lines(
    lead: &'static str,
    nodes: &[String],
    node: Style,
    muted: Style,
) -> Vec<Line<'static>> {
    if nodes.is_empty() {
        return vec![Line::styled("(empty)", muted)];
    }
    let mut spans = vec![Span::styled(lead, muted)];
    for (i, name) in nodes.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", muted));
        }
        spans.push(Span::styled(name.clone(), node));
    }
    vec![Line::from(spans)]
}
