//! Terminal front ends: the raw-mode wizard and cliclack-based `--yes` mode
//!
//! This module is optional and only available when the `tui` feature is enabled.

pub mod input;
mod prompts;
mod terminal;

pub use prompts::{run, selection_from_args, CreateArgs, DEFAULT_APP_NAME};
pub use terminal::{restore_terminal, run_interactive};
