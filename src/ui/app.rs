//! Trace player state and event loop
//!
//! The player owns an immutable [`Trace`] and a cursor into it. Stepping,
//! seeking and auto-play only move the cursor; nothing is recomputed.

use crate::snapshot::{Step, Trace};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Auto-play advances one step per interval
const PLAY_INTERVAL: Duration = Duration::from_secs(1);

/// Which pane receives scroll keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structure,
    Narration,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structure => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Structure,
        }
    }
}

/// The main application state
pub struct App {
    /// The trace being played
    pub trace: Trace,

    /// Index of the step on screen
    pub position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub structure_scroll: usize,
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(trace: Trace) -> Self {
        let earlier = Instant::now()
            .checked_sub(PLAY_INTERVAL)
            .unwrap_or_else(Instant::now);
        App {
            trace,
            position: 0,
            focused_pane: FocusedPane::Structure,
            structure_scroll: 0,
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: earlier,
            last_space_press: earlier,
        }
    }

    /// Step currently on screen
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Move to `index`, clamped to the trace bounds
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.last_index());
        self.narration_scroll = usize::MAX;
    }

    /// Advance one step; `false` at the end of the trace
    pub fn step_forward(&mut self) -> bool {
        if self.position >= self.last_index() {
            return false;
        }
        self.seek(self.position + 1);
        true
    }

    /// Go back one step; `false` at the start of the trace
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.seek(self.position - 1);
        true
    }

    /// Advance auto-play if the interval has passed since the last step
    pub fn tick(&mut self, now: Instant) {
        if !self.is_playing || now.duration_since(self.last_play_time) < PLAY_INTERVAL {
            return;
        }
        if self.step_forward() {
            self.status_message = "Playing...".to_string();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = now;
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Poll with a timeout so auto-play keeps running
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let Some(step) = self.trace.get(self.position) else {
            return;
        };

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Structure (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        super::panes::render_structure_pane(
            frame,
            left_rows[0],
            step,
            self.focused_pane == FocusedPane::Structure,
            &mut self.structure_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            &self.trace,
            self.position,
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_auxiliary_pane(frame, columns[1], step.auxiliary.as_ref());

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            self.trace.algorithm(),
            &self.status_message,
            self.position,
            self.trace.len(),
            self.is_playing,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).map_or(0, |d| d as usize);
                let stepped = (0..n).take_while(|_| self.step_forward()).count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = if self.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.seek(self.last_index());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.seek(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_trace;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(generate_trace("bubble-sort", "3,2,1", None).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_step_and_clamp() {
        let mut app = app();
        assert!(!app.step_backward());
        assert!(app.step_forward());
        assert_eq!(app.position, 1);
        app.seek(10_000);
        assert_eq!(app.position, app.trace.len() - 1);
        assert!(!app.step_forward());
        assert!(app.current().is_some_and(|s| s.terminal));
    }

    #[test]
    fn test_keys_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.position, 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.position, 2);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.position, app.trace.len() - 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.position, 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_autoplay_runs_to_the_end() {
        let mut app = app();
        app.is_playing = true;
        let start = app.last_play_time;
        let mut now = start;
        for _ in 0..app.trace.len() + 1 {
            now += PLAY_INTERVAL;
            app.tick(now);
        }
        assert_eq!(app.position, app.trace.len() - 1);
        assert!(!app.is_playing);

        // Stepping back leaves the same snapshot it came from
        let last = app.current().cloned();
        app.step_backward();
        app.step_forward();
        assert_eq!(app.current().cloned(), last);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut app = app();
        app.is_playing = true;
        let now = app.last_play_time + PLAY_INTERVAL / 2;
        app.last_play_time = now;
        app.tick(now);
        assert_eq!(app.position, 0);
    }
}
