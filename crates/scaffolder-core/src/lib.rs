//! Scaffolder Core - interactive project configurator
//!
//! A terminal wizard collects an application name, language, framework,
//! project type, complexity tier and output path, then resolves those choices
//! into an ordered set of files and writes them to disk.
//!
//! # Architecture
//!
//! - **Matrix** - Choice enumerations, the language/framework registry and the pure resolver
//! - **Wizard** - `WizardState`, the pure `update` transition and the `render` projection
//! - **Driver** - `App`, which owns the state and runs scaffolding in the background
//! - **Materialize** - The `Materializer` trait and the file-system implementation
//! - **TUI** - Raw-mode terminal and cliclack front ends (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal front ends
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{driver, matrix, FsMaterializer, WizardState};
//!
//! let selection = matrix::Selection { /* ... */ };
//! let mut app = driver::App::new(WizardState::new(), Arc::new(FsMaterializer::new(false)));
//! let outcome = app.run_script(driver::scripted_events("demo", &selection, "demo")).await;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod materialize;
pub mod matrix;
pub mod plan;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use error::{MaterializeError, ParseChoiceError};
pub use materialize::{FsMaterializer, Materializer};
pub use matrix::{
    resolve, Complexity, FileTemplate, Framework, Language, ProjectMatrix, ProjectType, Selection,
};
pub use wizard::{render, update, Effect, Event, Outcome, Step, WizardState};

#[cfg(feature = "tui")]
pub use tui::run;
