use crate::error::{LuckError, Result};
use crate::types::WinTable;
use std::collections::BTreeMap;

/// Luck score per team: actual wins minus expected wins.
///
/// Both mappings must cover exactly the same teams.
pub fn compute_luck(
    actual: &WinTable,
    expected: &BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>> {
    if let Some(team) = expected.keys().find(|team| !actual.contains_key(*team)) {
        return Err(LuckError::TeamSetMismatch { team: team.clone(), missing_from: "actual" });
    }

    actual
        .iter()
        .map(|(team, &wins)| match expected.get(team) {
            Some(&expected_wins) => Ok((team.clone(), f64::from(wins) - expected_wins)),
            None => {
                Err(LuckError::TeamSetMismatch { team: team.clone(), missing_from: "expected" })
            }
        })
        .collect()
}
