//! # LuckEngine
//!
//! Measures how lucky each team in a fantasy football league was over a season.
//!
//! A team's expected wins come from comparing its score every week against
//! every other team's score that week, not just its scheduled opponent. Luck is
//! the gap between the wins it actually got and the wins its scores earned.
//!
//! Pipeline: [`loader`] → [`expected`] → [`luck`] → [`report::LuckReport`],
//! which chart renderers consume.

pub mod config;
pub mod error;
pub mod expected;
pub mod loader;
pub mod luck;
pub mod pipeline;
pub mod report;
pub mod types;


pub use config::{InputConfig, LoggingConfig, LuckConfig, OutputConfig};
pub use error::{LuckError, Result};
pub use expected::{compute_expected_wins, weekly_expected_wins};
pub use loader::{load_season, load_season_from_path, load_season_from_reader};
pub use luck::compute_luck;
pub use pipeline::{analyze, analyze_file};
pub use report::LuckReport;
pub use types::{MatchupRecord, ScoreTable, SeasonRecords, TeamLuck, WinTable};

/// Current version of the luck engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
