//! Luck report handed to chart renderers

use crate::error::{LuckError, Result};
use crate::types::{TeamLuck, WinTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Final numbers for one season, one entry per team in name order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuckReport {
    pub generated_at: DateTime<Utc>,
    /// Number of weeks in the season
    pub weeks: usize,
    pub teams: Vec<TeamLuck>,
}

impl LuckReport {
    /// Join the three per-team tables into report rows
    pub fn from_tables(
        weeks: usize,
        actual: &WinTable,
        expected: &BTreeMap<String, f64>,
        luck: &BTreeMap<String, f64>,
    ) -> Result<Self> {
        let mut teams = Vec::with_capacity(actual.len());
        for (team, &actual_wins) in actual {
            let expected_wins = *expected.get(team).ok_or_else(|| {
                LuckError::TeamSetMismatch { team: team.clone(), missing_from: "expected" }
            })?;
            let luck = *luck.get(team).ok_or_else(|| LuckError::TeamSetMismatch {
                team: team.clone(),
                missing_from: "luck",
            })?;
            teams.push(TeamLuck { team: team.clone(), actual_wins, expected_wins, luck });
        }

        Ok(Self { generated_at: Utc::now(), weeks, teams })
    }

    /// Rows sorted by luck, luckiest first
    pub fn by_luck_descending(&self) -> Vec<&TeamLuck> {
        let mut rows: Vec<&TeamLuck> = self.teams.iter().collect();
        rows.sort_by(|a, b| b.luck.total_cmp(&a.luck));
        rows
    }

    /// Rows sorted alphabetically by team name
    pub fn alphabetical(&self) -> Vec<&TeamLuck> {
        let mut rows: Vec<&TeamLuck> = self.teams.iter().collect();
        rows.sort_by(|a, b| a.team.cmp(&b.team));
        rows
    }

    pub fn get(&self, team: &str) -> Option<&TeamLuck> {
        self.teams.iter().find(|row| row.team == team)
    }

    /// Team name -> luck score
    pub fn luck_scores(&self) -> BTreeMap<String, f64> {
        self.teams.iter().map(|row| (row.team.clone(), row.luck)).collect()
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| LuckError::io(path, e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LuckError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }
}
