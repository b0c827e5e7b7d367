//! Terminal UI for the clinical wizard.
//!
//! Single-threaded and event-driven: all mutation happens on discrete key
//! or submission-completion events inside one `select!` loop.

pub mod app;
pub mod event;
pub mod render;
pub mod state;
pub mod widgets;

pub use app::TuiApp;
pub use event::AppEvent;
pub use state::{AppState, ResultsTab};
