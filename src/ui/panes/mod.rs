//! TUI pane rendering modules
//!
//! Every pane is a stateless, read-only consumer of the current step. None
//! of them mutate what they receive, and each tolerates a missing step or an
//! empty array by drawing a neutral placeholder.
//!
//! # Pane Modules
//!
//! - [`bars`]: bar chart of the array, coloured by highlight role
//! - [`code`]: pseudocode listing with breakpoints and the current line
//! - [`variables`]: variable watch table
//! - [`description`]: bilingual explanation of the current step
//! - [`status`]: status bar with keybindings and playback state
//! - `formatting`: styled rendering of watched values

mod formatting;

pub mod bars;
pub mod code;
pub mod description;
pub mod status;
pub mod variables;

// Re-export render functions for convenience
pub use bars::{bar_role, render_bars_pane, BarRole};
pub use code::{render_code_pane, CodeRenderData};
pub use description::render_description_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use variables::render_variables_pane;
