//! TUI pane rendering modules
//!
//! Every pane draws from a single [`Step`](crate::snapshot::Step) (or the
//! trace prefix up to it), so rendering never needs per-algorithm logic.
//!
//! # Pane Modules
//!
//! - [`structure`]: array cells, graph nodes with traversal state, or DP table
//! - [`auxiliary`]: merge buffer, search window, BFS queue or DFS stack
//! - [`narration`]: narration history up to the current step
//! - [`status`]: status bar with keybindings and playback state

pub mod auxiliary;
pub mod narration;
pub mod status;
pub mod structure;

pub use auxiliary::render_auxiliary_pane;
pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use structure::render_structure_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
