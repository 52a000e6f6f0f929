//! Configuration and logging utilities

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::setup_logging;
