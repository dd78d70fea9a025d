//! Luck chart tool
//!
//! Runs the luck pipeline over a season of matchups and renders the result
//! as bar charts on the terminal and as files.

pub mod chart;
pub mod cli;
pub mod logging;

pub use chart::{ChartRenderer, TextChartRenderer, render_artifacts, write_artifacts};
pub use cli::Cli;
pub use logging::initialize_logging_with_config;
