use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    /// Step counter badge and narration line numbers
    pub primary: Color,
    /// Algorithm name and the playing badge
    pub secondary: Color,
    /// Undiscovered nodes, past narration, secondary text
    pub comment: Color,
    /// Visited nodes and the start badge
    pub success: Color,
    pub error: Color,
    /// Array, buffer and table values
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    /// Status bar and the current narration line
    pub current_line_bg: Color,
    /// Cells touched by the current step
    pub highlight_bg: Color,
    /// Queued or stacked graph nodes
    pub frontier: Color,
    /// Table axis labels
    pub label: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    highlight_bg: Color::Rgb(249, 226, 175),
    frontier: Color::Rgb(245, 194, 231),
    label: Color::Rgb(148, 226, 213),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_states_are_distinguishable() {
        let t = &DEFAULT_THEME;
        assert_ne!(t.comment, t.frontier);
        assert_ne!(t.frontier, t.success);
        assert_ne!(t.comment, t.success);
        assert_ne!(t.highlight_bg, t.current_line_bg);
        assert_ne!(t.label, t.number);
    }
}
