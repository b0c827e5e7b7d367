//! Configuration file support

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, ServiceConfig, TuiConfig};
pub use loader::ConfigLoader;
