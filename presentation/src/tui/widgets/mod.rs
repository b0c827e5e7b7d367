//! Widgets for the wizard TUI

pub mod completion;
pub mod form;
pub mod results;
pub mod status_bar;
pub mod tab_bar;

pub use completion::CompletionWidget;
pub use form::FormWidget;
pub use results::ResultsWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::SectionTabsWidget;
