//! Playback controller for a step sequence
//!
//! [`PlaybackController`] owns a cursor into a [`StepSequence`] and moves it
//! either on demand (step forward/backward) or automatically while playing.
//!
//! # States
//!
//! ```text
//!            load                 play
//!   Idle ───────────▶ Ready ◀──────────────▶ Playing
//!                      ▲ │       pause / bp     │
//!          step back   │ │ step to end          │ tick reaches end
//!                      │ ▼                      ▼
//!                    Finished ◀─────────────────┘
//! ```
//!
//! # Timer model
//!
//! The event loop is single threaded. The auto-advance timer is one owned
//! deadline (`Option<Instant>`), so at most one advance is ever pending.
//! Every transition that could invalidate it (pause, reset, load, manual
//! step, speed change) replaces or clears that deadline before acting.
//! [`PlaybackController::poll`] fires the tick once the deadline passes;
//! [`PlaybackController::tick`] is the tick itself.
//!
//! # Breakpoints
//!
//! Breakpoints are pseudocode line numbers. While playing, a tick that would
//! apply a step whose `line` is a breakpoint stops instead, leaving that step
//! pending. The next `play()` from that same position applies it on the
//! first tick so playback can continue past the breakpoint.
//!
//! Boundary conditions never error: moving past either end, or driving an
//! empty controller, is a no-op.

use crate::step::{Step, StepSequence};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const DEFAULT_SPEED_MS: u64 = 800;
pub const MIN_SPEED_MS: u64 = 50;
pub const MAX_SPEED_MS: u64 = 5000;
pub const SPEED_STEP_MS: u64 = 100;

/// Coarse state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No steps loaded
    Idle,
    /// Steps loaded, not auto-advancing
    Ready,
    /// Auto-advancing on the timer
    Playing,
    /// Cursor on the last step
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Ready => "READY",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Finished => "END",
        }
    }
}

/// Cursor, timer and breakpoints for one playback session
#[derive(Debug)]
pub struct PlaybackController {
    steps: StepSequence,
    current_index: usize,
    state: PlaybackState,
    speed_ms: u64,
    breakpoints: FxHashSet<usize>,
    /// The single outstanding scheduled advance
    pending_tick: Option<Instant>,
    /// Cursor position of the last breakpoint halt
    halted_at: Option<usize>,
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            steps: StepSequence::empty(),
            current_index: 0,
            state: PlaybackState::Idle,
            speed_ms: DEFAULT_SPEED_MS,
            breakpoints: FxHashSet::default(),
            pending_tick: None,
            halted_at: None,
        }
    }

    /// Create a controller with `steps` already loaded
    pub fn with_steps(steps: StepSequence) -> Self {
        let mut controller = Self::new();
        controller.load(steps);
        controller
    }

    // ========== Transitions ==========

    /// Replace the step sequence; the cursor returns to 0, breakpoints stay
    pub fn load(&mut self, steps: StepSequence) {
        self.cancel_tick();
        self.steps = steps;
        self.current_index = 0;
        self.halted_at = None;
        self.state = if self.steps.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Ready
        };
        debug!(steps = self.steps.len(), state = ?self.state, "loaded step sequence");
    }

    /// Start auto-advancing; restarts from 0 when already on the last step
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle | PlaybackState::Playing => return,
            PlaybackState::Ready | PlaybackState::Finished => {}
        }

        if self.is_at_end() {
            self.current_index = 0;
            self.halted_at = None;
        }

        self.state = PlaybackState::Playing;
        self.schedule_tick(Instant::now());
        debug!(index = self.current_index, speed_ms = self.speed_ms, "playback started");
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.cancel_tick();
        self.state = PlaybackState::Ready;
        debug!(index = self.current_index, "playback paused");
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the cursor by one step. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.state == PlaybackState::Idle || self.is_at_end() {
            return false;
        }

        self.current_index += 1;
        self.halted_at = None;

        if self.is_at_end() {
            self.finish();
        } else if self.state == PlaybackState::Playing {
            self.schedule_tick(Instant::now());
        }
        trace!(index = self.current_index, "stepped forward");
        true
    }

    /// Move the cursor back by one step. Returns whether the cursor moved.
    pub fn step_backward(&mut self) -> bool {
        if self.state == PlaybackState::Idle || self.current_index == 0 {
            return false;
        }

        self.current_index -= 1;
        self.halted_at = None;

        match self.state {
            PlaybackState::Finished => self.state = PlaybackState::Ready,
            PlaybackState::Playing => self.schedule_tick(Instant::now()),
            PlaybackState::Idle | PlaybackState::Ready => {}
        }
        trace!(index = self.current_index, "stepped backward");
        true
    }

    /// Stop playback and return to the first step
    pub fn reset(&mut self) {
        self.cancel_tick();
        self.current_index = 0;
        self.halted_at = None;
        if self.state != PlaybackState::Idle {
            self.state = PlaybackState::Ready;
        }
        debug!("playback reset");
    }

    /// Stop playback and move to the last step
    pub fn jump_to_end(&mut self) {
        if self.state == PlaybackState::Idle {
            return;
        }
        self.current_index = self.steps.len() - 1;
        self.halted_at = None;
        self.finish();
    }

    /// Add or remove a breakpoint on a pseudocode line. Returns whether the
    /// line now has a breakpoint.
    pub fn toggle_breakpoint(&mut self, line: usize) -> bool {
        let enabled = if self.breakpoints.remove(&line) {
            false
        } else {
            self.breakpoints.insert(line);
            true
        };
        debug!(line, enabled, "breakpoint toggled");
        enabled
    }

    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    /// Set the delay between automatic advances, clamped to the valid range
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed_ms = speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        if self.state == PlaybackState::Playing {
            self.schedule_tick(Instant::now());
        }
        debug!(speed_ms = self.speed_ms, "speed changed");
    }

    /// Shorten the delay by one increment
    pub fn faster(&mut self) {
        self.set_speed(self.speed_ms.saturating_sub(SPEED_STEP_MS));
    }

    /// Lengthen the delay by one increment
    pub fn slower(&mut self) {
        self.set_speed(self.speed_ms.saturating_add(SPEED_STEP_MS));
    }

    // ========== Timer ==========

    /// Fire the scheduled advance if its deadline has passed
    ///
    /// At most one tick fires per call. Returns whether the cursor moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_tick {
            Some(deadline) if now >= deadline => self.tick_at(now),
            _ => false,
        }
    }

    /// The automatic-advance tick. No-op unless playing.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.pending_tick = None;

        let next = self.current_index + 1;
        let Some(next_step) = self.steps.get(next) else {
            self.finish();
            return false;
        };

        let resuming = self.halted_at == Some(self.current_index);
        if !resuming && self.breakpoints.contains(&next_step.line) {
            self.state = PlaybackState::Ready;
            self.halted_at = Some(self.current_index);
            debug!(
                index = self.current_index,
                line = next_step.line,
                "halted before breakpoint"
            );
            return false;
        }

        self.current_index = next;
        self.halted_at = None;
        if self.is_at_end() {
            self.finish();
        } else {
            self.schedule_tick(now);
        }
        trace!(index = self.current_index, "auto-advanced");
        true
    }

    /// When the pending advance is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_tick
    }

    fn schedule_tick(&mut self, now: Instant) {
        // Replacing the Option drops any earlier deadline.
        self.pending_tick = Some(now + Duration::from_millis(self.speed_ms));
        trace!(speed_ms = self.speed_ms, "tick scheduled");
    }

    fn cancel_tick(&mut self) {
        if self.pending_tick.take().is_some() {
            trace!("pending tick cancelled");
        }
    }

    fn finish(&mut self) {
        self.cancel_tick();
        self.state = PlaybackState::Finished;
        debug!(index = self.current_index, "playback finished");
    }

    // ========== Accessors ==========

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current_index)
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        !self.steps.is_empty() && self.current_index + 1 >= self.steps.len()
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn has_breakpoint(&self, line: usize) -> bool {
        self.breakpoints.contains(&line)
    }

    /// Breakpoint lines in ascending order
    pub fn breakpoints(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.breakpoints.iter().copied().collect();
        lines.sort_unstable();
        lines
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{BubbleHighlight, Description, Highlight};

    fn sequence(lines: &[usize]) -> StepSequence {
        StepSequence::new(
            lines
                .iter()
                .map(|&line| {
                    Step::new(
                        &[1, 2],
                        line,
                        Description::new("s", "s"),
                        Highlight::Bubble(BubbleHighlight::default()),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_idle_controller_ignores_everything() {
        let mut c = PlaybackController::new();
        c.play();
        assert!(!c.step_forward());
        assert!(!c.step_backward());
        assert!(!c.tick());
        c.jump_to_end();
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.current_index(), 0);
        assert!(c.current_step().is_none());
    }

    #[test]
    fn test_tick_reschedules_single_deadline() {
        let mut c = PlaybackController::with_steps(sequence(&[0, 1, 2]));
        c.play();
        let first = c.next_deadline().expect("scheduled");
        c.play();
        assert_eq!(c.next_deadline(), Some(first));

        assert!(c.poll(first));
        assert_eq!(c.current_index(), 1);
        let second = c.next_deadline().expect("rescheduled");
        assert!(second > first);
        assert!(!c.poll(first));
    }

    #[test]
    fn test_reaching_end_stops_playing() {
        let mut c = PlaybackController::with_steps(sequence(&[0, 1]));
        c.play();
        assert!(c.tick());
        assert_eq!(c.state(), PlaybackState::Finished);
        assert!(!c.is_playing());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut c = PlaybackController::new();
        c.set_speed(0);
        assert_eq!(c.speed_ms(), MIN_SPEED_MS);
        c.set_speed(u64::MAX);
        assert_eq!(c.speed_ms(), MAX_SPEED_MS);
        c.set_speed(500);
        c.faster();
        assert_eq!(c.speed_ms(), 400);
        c.slower();
        c.slower();
        assert_eq!(c.speed_ms(), 600);
    }

    #[test]
    fn test_resume_after_breakpoint_applies_pending_step() {
        let mut c = PlaybackController::with_steps(sequence(&[0, 4, 4, 1]));
        c.toggle_breakpoint(4);
        c.play();
        assert!(!c.tick());
        assert_eq!(c.current_index(), 0);

        c.play();
        assert!(c.tick());
        assert_eq!(c.current_index(), 1);
        // The following step is on the same line and halts again.
        assert!(!c.tick());
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.state(), PlaybackState::Ready);
    }

    #[test]
    fn test_breakpoints_listed_in_order() {
        let mut c = PlaybackController::new();
        c.toggle_breakpoint(7);
        c.toggle_breakpoint(2);
        c.toggle_breakpoint(5);
        assert!(!c.toggle_breakpoint(5));
        assert_eq!(c.breakpoints(), vec![2, 7]);
        c.clear_breakpoints();
        assert!(c.breakpoints().is_empty());
    }
}
