//! Terminal trace player built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: cursor over the trace, keyboard event loop, auto-play
//! - **[`panes`]**: stateless render functions for each visible pane
//!   (structure, auxiliary, narration, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] from a generated [`Trace`](crate::snapshot::Trace)
//! and call [`App::run`](app::App::run) to start the event loop.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
