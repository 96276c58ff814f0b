//! # Introduction
//!
//! algotrace turns a textbook algorithm run into a replayable trace: an
//! ordered list of immutable [`step::Step`] snapshots (array contents,
//! highlighted indices, watched variables, a pseudocode line and a bilingual
//! explanation). The trace is then navigated forward and backward, or played
//! back on a timer with breakpoints, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → Parser → Array → Generator → StepSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`input`]: parses a comma list or JSON array and clamps it; seeded
//!    random arrays.
//! 2. [`generators`]: bubble sort, selection sort and binary search, each
//!    a pure function producing a [`step::StepSequence`].
//! 3. [`step`]: the shared step model with per-algorithm
//!    [`step::Highlight`] variants.
//! 4. [`playback`]: cursor, play/pause, speed and breakpoints over a
//!    sequence, with a single cancellable scheduled tick.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotrace::generators::Algorithm;
//! use algotrace::playback::PlaybackController;
//!
//! let steps = Algorithm::BubbleSort.generate(&[5, 2, 8, 1, 9], None).unwrap();
//! assert_eq!(steps.last().unwrap().array, vec![1, 2, 5, 8, 9]);
//!
//! let mut player = PlaybackController::with_steps(steps);
//! player.step_forward();
//! assert_eq!(player.current_index(), 1);
//! ```

pub mod errors;
pub mod generators;
pub mod input;
pub mod playback;
pub mod step;
pub mod ui;
