use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team name -> one point total per week, ordered by week
pub type ScoreTable = BTreeMap<String, Vec<f64>>;

/// Team name -> number of real wins
pub type WinTable = BTreeMap<String, u32>;

/// A single head-to-head result for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    /// Source line, used in error messages (0 when not read from a file)
    pub line: u64,
    /// Week identifier as it appeared in the input
    pub week: String,
    pub team_a: String,
    pub points_a: f64,
    pub team_b: String,
    pub points_b: f64,
}

impl MatchupRecord {
    pub fn new(
        week: impl Into<String>,
        team_a: impl Into<String>,
        points_a: f64,
        team_b: impl Into<String>,
        points_b: f64,
    ) -> Self {
        Self {
            line: 0,
            week: week.into(),
            team_a: team_a.into(),
            points_a,
            team_b: team_b.into(),
            points_b,
        }
    }

    /// Builder-style setter for the source line
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    /// Name of the strict winner, or `None` on an exact tie
    pub fn winner(&self) -> Option<&str> {
        if self.points_a > self.points_b {
            Some(self.team_a.as_str())
        } else if self.points_b > self.points_a {
            Some(self.team_b.as_str())
        } else {
            None
        }
    }
}

/// A full season after ingestion: rectangular score table plus real win counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecords {
    /// Week identifiers in week order
    pub weeks: Vec<String>,
    /// Every team's weekly points; all series have `weeks.len()` entries
    pub scores: ScoreTable,
    /// Every team's actual win count
    pub actual_wins: WinTable,
}

impl SeasonRecords {
    pub fn team_count(&self) -> usize {
        self.scores.len()
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }
}

/// Per-team line of the final report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLuck {
    pub team: String,
    pub actual_wins: u32,
    pub expected_wins: f64,
    pub luck: f64,
}

impl TeamLuck {
    /// Lucky teams won more than their scores earned
    pub fn is_lucky(&self) -> bool {
        self.luck > 0.0
    }
}
