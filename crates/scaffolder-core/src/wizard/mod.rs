//! Step-by-step configuration wizard
//!
//! This module provides:
//! - `WizardState` and the pure `update(state, event) -> (state, effect)` transition
//! - Option lists and cursor bounds per step, backed by the language registry
//! - `render`, a pure projection of the state to display text

pub mod render;
pub mod state;

pub use render::{next_steps, render};
pub use state::{
    option_count, option_labels, update, Effect, Event, Outcome, ScaffoldReport,
    ScaffoldRequest, Step, WizardState, DEFAULT_OUTPUT_PATH,
};
