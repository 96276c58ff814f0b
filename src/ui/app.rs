//! Main TUI application state and logic

use crate::errors::InputError;
use crate::generators::Algorithm;
use crate::input::{self, XorShift64, MAX_VALUE, MIN_INPUT_LEN, MIN_VALUE};
use crate::playback::{PlaybackController, PlaybackState};
use crate::step::Locale;
use crate::ui::panes::{
    render_bars_pane, render_code_pane, render_description_pane, render_status_bar,
    render_variables_pane, CodeRenderData, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Longest the loop waits for input before re-checking the playback timer
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Code,
    Variables,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Code => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Code,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback session for the current trace
    pub controller: PlaybackController,

    /// Algorithm being traced
    pub algorithm: Algorithm,

    /// Input array the trace was generated from
    pub input: Vec<i64>,

    /// Search target (binary search only)
    pub target: Option<i64>,

    /// Source of fresh random inputs
    pub rng: XorShift64,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Pseudocode line selected for breakpoint toggling
    pub code_cursor: usize,

    /// Language of step descriptions
    pub locale: Locale,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Generate the trace for `input` and build an app around it
    pub fn new(
        algorithm: Algorithm,
        input: Vec<i64>,
        target: Option<i64>,
        rng: XorShift64,
    ) -> Result<Self, InputError> {
        let target = Self::resolve_target(algorithm, &input, target);
        let steps = algorithm.generate(&input, target)?;

        Ok(App {
            controller: PlaybackController::with_steps(steps),
            algorithm,
            input,
            target,
            rng,
            focused_pane: FocusedPane::Code,
            code_cursor: 0,
            locale: Locale::English,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        })
    }

    fn resolve_target(algorithm: Algorithm, input: &[i64], target: Option<i64>) -> Option<i64> {
        if algorithm.needs_target() {
            target.or_else(|| input::default_target(input))
        } else {
            target
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next scheduled advance
            let timeout = self
                .controller
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .map_or(INPUT_POLL, |d| d.min(INPUT_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.poll_playback(Instant::now());
        }

        Ok(())
    }

    /// Let the controller fire a due tick and report what happened
    fn poll_playback(&mut self, now: Instant) {
        let was_playing = self.controller.is_playing();
        let advanced = self.controller.poll(now);

        if !was_playing {
            return;
        }
        match self.controller.state() {
            PlaybackState::Playing if advanced => {
                self.status_message = "Playing...".to_string();
            }
            PlaybackState::Finished => {
                self.status_message = "Playback complete".to_string();
            }
            PlaybackState::Ready => {
                let line = self
                    .controller
                    .steps()
                    .get(self.controller.current_index() + 1)
                    .map_or(0, |s| s.line);
                self.status_message = format!("Paused at breakpoint on line {}", line);
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Explanation (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[0]);

        // Right column: Pseudocode (top) | Variables (bottom)
        let listing = self.algorithm.pseudocode();
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(listing.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let step = self.controller.current_step();

        let title = match (self.algorithm.needs_target(), self.target) {
            (true, Some(target)) => format!("{} (target {})", self.algorithm, target),
            _ => self.algorithm.to_string(),
        };
        render_bars_pane(frame, left_rows[0], step, &title);
        render_description_pane(frame, left_rows[1], step, self.locale);

        let breakpoints = self.controller.breakpoints();
        render_code_pane(
            frame,
            right_rows[0],
            &CodeRenderData {
                listing,
                current_line: step.map(|s| s.line),
                breakpoints: &breakpoints,
                cursor: self.code_cursor,
                is_focused: self.focused_pane == FocusedPane::Code,
            },
        );

        render_variables_pane(
            frame,
            right_rows[1],
            step,
            self.focused_pane == FocusedPane::Variables,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.controller.current_index(),
                total_steps: self.controller.len(),
                state: self.controller.state(),
                speed_ms: self.controller.speed_ms(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.controller.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n).take_while(|_| self.controller.step_forward()).count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.controller.pause();
                self.status_message = if self.controller.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.controller.pause();
                self.status_message = if self.controller.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Code {
                    self.code_cursor = self.code_cursor.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Code {
                    let last = self.algorithm.pseudocode().len().saturating_sub(1);
                    self.code_cursor = (self.code_cursor + 1).min(last);
                }
            }
            KeyCode::Char('b') => {
                let enabled = self.controller.toggle_breakpoint(self.code_cursor);
                self.status_message = if enabled {
                    format!("Breakpoint set on line {}", self.code_cursor)
                } else {
                    format!("Breakpoint removed from line {}", self.code_cursor)
                };
            }
            KeyCode::Char('c') => {
                self.controller.clear_breakpoints();
                self.status_message = "Breakpoints cleared".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.controller.toggle_play();
                    self.status_message = if self.controller.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.faster();
                self.status_message = format!("Delay {}ms", self.controller.speed_ms());
            }
            KeyCode::Char('-') => {
                self.controller.slower();
                self.status_message = format!("Delay {}ms", self.controller.speed_ms());
            }
            KeyCode::Char('l') => {
                self.locale = self.locale.toggle();
            }
            KeyCode::Char('n') => {
                self.regenerate();
            }
            KeyCode::Char('a') => {
                self.cycle_algorithm();
            }
            KeyCode::Enter => {
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace | KeyCode::Char('r') => {
                self.controller.reset();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Draw a fresh random input of the same size and reload the trace
    fn regenerate(&mut self) {
        let size = self.input.len().max(MIN_INPUT_LEN);
        self.input = input::random_array(&mut self.rng, size, MIN_VALUE, MAX_VALUE);
        self.target = None;
        self.reload();
        self.status_message = format!("New input: {:?}", self.input);
    }

    /// Switch to the next algorithm over the same input
    fn cycle_algorithm(&mut self) {
        let pos = Algorithm::ALL
            .iter()
            .position(|a| *a == self.algorithm)
            .unwrap_or(0);
        self.algorithm = Algorithm::ALL[(pos + 1) % Algorithm::ALL.len()];
        self.code_cursor = 0;
        self.controller.clear_breakpoints();
        self.reload();
        self.status_message = format!("Switched to {}", self.algorithm);
    }

    fn reload(&mut self) {
        self.target = Self::resolve_target(self.algorithm, &self.input, self.target);
        match self.algorithm.generate(&self.input, self.target) {
            Ok(steps) => {
                info!(algorithm = %self.algorithm, steps = steps.len(), "trace regenerated");
                self.controller.load(steps);
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app(algorithm: Algorithm) -> App {
        App::new(algorithm, vec![5, 2, 8, 1, 9], None, XorShift64::new(42)).expect("valid input")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_renders_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut app = app(algorithm);
            let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
            terminal.draw(|f| app.render(f)).expect("draw");
            press(&mut app, KeyCode::Enter);
            terminal.draw(|f| app.render(f)).expect("draw at end");
        }
    }

    #[test]
    fn test_binary_search_defaults_target_to_median() {
        let app = app(Algorithm::BinarySearch);
        assert_eq!(app.target, Some(5));
        assert!(app.controller.steps().last().is_some_and(|s| s.found()));
    }

    #[test]
    fn test_breakpoint_key_uses_code_cursor() {
        let mut app = app(Algorithm::BubbleSort);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.controller.breakpoints(), vec![2]);
        press(&mut app, KeyCode::Char('b'));
        assert!(app.controller.breakpoints().is_empty());
    }

    #[test]
    fn test_arrow_keys_step_and_pause() {
        let mut app = app(Algorithm::SelectionSort);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller.current_index(), 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller.current_index(), 2);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller.current_index(), 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_message, "Already at the first step");
    }

    #[test]
    fn test_regenerate_keeps_breakpoints_and_resets_cursor() {
        let mut app = app(Algorithm::BubbleSort);
        app.controller.toggle_breakpoint(5);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.current_index(), 0);
        assert_eq!(app.controller.breakpoints(), vec![5]);
        assert_eq!(app.input.len(), 5);
    }

    #[test]
    fn test_cycle_algorithm_resolves_target() {
        let mut app = app(Algorithm::SelectionSort);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.algorithm, Algorithm::BinarySearch);
        assert_eq!(app.target, Some(5));
    }
}
