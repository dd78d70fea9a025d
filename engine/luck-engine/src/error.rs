//! Error types for the luck engine

use thiserror::Error;

/// Result type alias for luck engine operations
pub type Result<T> = std::result::Result<T, LuckError>;

/// Errors that can occur while loading a season or computing luck scores
#[derive(Error, Debug)]
pub enum LuckError {
    /// I/O errors while opening or writing files
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors raised by the CSV reader itself
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A row that is not a well-formed matchup record
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// A points value that is not a finite real number
    #[error("Invalid points value {value:?} for team {team} on line {line}")]
    InvalidPoints { line: u64, team: String, value: String },

    /// A NaN or infinite score handed to the engine
    #[error("Non-finite score {value} at {location}")]
    NonFiniteScore { location: String, value: f64 },

    /// The same team recorded twice within one week
    #[error("Team {team} appears more than once in week {week}")]
    DuplicateTeamInWeek { week: String, team: String },

    /// Teams with unequal numbers of recorded weeks
    #[error("Team {team} has {weeks} weekly scores, expected {expected}")]
    MisalignedSeries { team: String, weeks: usize, expected: usize },

    /// Fewer than two teams, so expected wins are undefined
    #[error("League has {teams} team(s); at least two are required")]
    DegenerateLeague { teams: usize },

    /// Actual and expected wins computed over different team sets
    #[error("Team {team} is missing from the {missing_from} wins")]
    TeamSetMismatch { team: String, missing_from: &'static str },

    /// Input contained a header but no matchup rows
    #[error("No matchup records found in input")]
    EmptyInput,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LuckError {
    /// Create a new malformed record error
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord { line, reason: reason.into() }
    }

    /// Create a new I/O error tagged with the path involved
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io { path: path.as_ref().display().to_string(), source }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors caused by the contents of the input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::InvalidPoints { .. }
                | Self::NonFiniteScore { .. }
                | Self::DuplicateTeamInWeek { .. }
                | Self::MisalignedSeries { .. }
                | Self::DegenerateLeague { .. }
                | Self::EmptyInput
        )
    }
}
