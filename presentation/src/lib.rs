//! Presentation layer for cardio-quorum
//!
//! This crate contains the multi-section input wizard, the result
//! interpreter that projects service responses into view-models, the
//! ratatui TUI, CLI definitions, and console output formatting.

pub mod cli;
pub mod interpret;
pub mod output;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, parse_field_arg};
pub use interpret::{ConsensusView, ModelRow, ResultView, RiskBadge};
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;
pub use wizard::WizardState;
