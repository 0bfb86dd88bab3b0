//! Primary structure pane: array cells, graph nodes or the DP table

use super::border_style;
use crate::snapshot::{GraphView, Highlight, NodeState, Step, Structure, TableView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Width of one rendered cell, including its separator
const CELL_WIDTH: usize = 6;

/// Render the structure captured by `step`
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", step.kind.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let lines = match &step.structure {
        Structure::Array { values } => array_lines(values, &step.highlights),
        Structure::Graph(graph) => graph_lines(graph, &step.highlights),
        Structure::Table(table) => table_lines(table, &step.highlights),
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn cell_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(DEFAULT_THEME.highlight_bg)
            .fg(ratatui::style::Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    }
}

fn array_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    let cells = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let highlighted = highlights.contains(&Highlight::Index(i));
            Span::styled(format!("{:^w$}", v, w = CELL_WIDTH), cell_style(highlighted))
        })
        .collect::<Vec<_>>();
    let indices = (0..values.len())
        .map(|i| {
            Span::styled(
                format!("{:^w$}", i, w = CELL_WIDTH),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        })
        .collect::<Vec<_>>();

    vec![Line::from(cells), Line::from(indices)]
}

fn graph_lines(graph: &GraphView, highlights: &[Highlight]) -> Vec<Line<'static>> {
    if graph.nodes.is_empty() {
        return vec![Line::styled(
            "(empty graph)",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let state = graph.states.get(i).copied().unwrap_or(NodeState::Undiscovered);
            let (marker, color) = match state {
                NodeState::Undiscovered => ("○", DEFAULT_THEME.comment),
                NodeState::Frontier => ("◐", DEFAULT_THEME.frontier),
                NodeState::Visited => ("●", DEFAULT_THEME.success),
            };
            let name_style = if highlights.contains(&Highlight::Node(i)) {
                cell_style(true)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };
            let targets = graph.adjacency.get(i).map_or_else(String::new, |edges| {
                edges
                    .iter()
                    .filter_map(|&t| graph.nodes.get(t).cloned())
                    .collect::<Vec<_>>()
                    .join(", ")
            });
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(color)),
                Span::styled(format!(" {} ", name), name_style),
                Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(targets, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect()
}

fn table_lines(table: &TableView, highlights: &[Highlight]) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(DEFAULT_THEME.label)
        .add_modifier(Modifier::BOLD);
    let label_width = table
        .row_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(1)
        + 1;

    let mut header = vec![Span::raw(" ".repeat(label_width))];
    header.extend(
        table
            .col_labels
            .iter()
            .map(|l| Span::styled(format!("{:^w$}", l, w = CELL_WIDTH), label_style)),
    );

    let mut lines = vec![Line::from(header)];
    for (row, cells) in table.cells.iter().enumerate() {
        let label = table.row_labels.get(row).map_or("", String::as_str);
        let mut spans = vec![Span::styled(
            format!("{:<w$}", label, w = label_width),
            label_style,
        )];
        spans.extend(cells.iter().enumerate().map(|(col, cell)| {
            let highlighted = highlights.contains(&Highlight::Cell { row, col });
            let text = cell.map_or_else(|| "·".to_string(), |v| v.to_string());
            let style = if cell.is_none() && !highlighted {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                cell_style(highlighted)
            };
            Span::styled(format!("{:^w$}", text, w = CELL_WIDTH), style)
        }));
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_lines_mark_highlights() {
        let lines = array_lines(&[3, 1], &[Highlight::Index(1)]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[1].style, cell_style(true));
        assert_eq!(lines[0].spans[0].style, cell_style(false));
    }

    #[test]
    fn test_table_lines_have_header_and_rows() {
        let table = TableView {
            row_labels: vec!["0".to_string(), "1".to_string()],
            col_labels: vec!["a".to_string(), "b".to_string()],
            cells: vec![vec![Some(0), None], vec![Some(1), Some(2)]],
        };
        let lines = table_lines(&table, &[Highlight::Cell { row: 1, col: 1 }]);
        assert_eq!(lines.len(), 3);
        // label column + two cells
        assert_eq!(lines[2].spans.len(), 3);
        assert_eq!(lines[2].spans[2].style, cell_style(true));
    }
}
