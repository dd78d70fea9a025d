//! Expected-wins engine
//!
//! Each week every team is compared against every other team's score for
//! that same week. A team earns `beats / (T - 1)` expected wins for the week,
//! where `beats` is the number of opponents it strictly outscored. Ties earn
//! nothing for either side, matching how actual wins are counted.

use crate::error::{LuckError, Result};
use crate::types::ScoreTable;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Expected wins contributed by a single week, in the order the scores were given.
///
/// The scores are sorted once; a team's beat count is the number of scores
/// strictly below its own, found by binary search. Scores must be finite;
/// a NaN breaks the ordering the binary search relies on.
pub fn weekly_expected_wins(scores: &[f64]) -> Result<Vec<f64>> {
    if scores.len() < 2 {
        return Err(LuckError::DegenerateLeague { teams: scores.len() });
    }
    if let Some((position, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(LuckError::NonFiniteScore {
            location: format!("position {}", position),
            value,
        });
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let opponents = (scores.len() - 1) as f64;

    Ok(scores
        .iter()
        .map(|&score| {
            let beats = sorted.partition_point(|&other| other < score);
            beats as f64 / opponents
        })
        .collect())
}

/// Total expected wins per team over the whole season.
///
/// Every series must have the same length and hold only finite scores; a
/// league with fewer than two teams is rejected.
pub fn compute_expected_wins(scores: &ScoreTable) -> Result<BTreeMap<String, f64>> {
    let teams: Vec<&String> = scores.keys().collect();
    if teams.len() < 2 {
        return Err(LuckError::DegenerateLeague { teams: teams.len() });
    }

    let week_count = validate_rectangular(scores)?;
    validate_finite(scores)?;
    let mut expected: Vec<f64> = vec![0.0; teams.len()];
    let mut week_scores: Vec<f64> = Vec::with_capacity(teams.len());

    for week in 0..week_count {
        week_scores.clear();
        week_scores.extend(teams.iter().map(|team| scores[*team][week]));

        let credit = weekly_expected_wins(&week_scores)?;
        for (total, earned) in expected.iter_mut().zip(credit) {
            *total += earned;
        }
        debug!("Week index {} processed for {} teams", week, teams.len());
    }

    info!("Computed expected wins for {} teams over {} weeks", teams.len(), week_count);

    Ok(teams.into_iter().cloned().zip(expected).collect())
}

/// Returns the shared series length, or the first team whose length differs.
fn validate_rectangular(scores: &ScoreTable) -> Result<usize> {
    let expected = scores.values().map(Vec::len).max().unwrap_or(0);
    match scores.iter().find(|(_, series)| series.len() != expected) {
        Some((team, series)) => Err(LuckError::MisalignedSeries {
            team: team.clone(),
            weeks: series.len(),
            expected,
        }),
        None => Ok(expected),
    }
}

fn validate_finite(scores: &ScoreTable) -> Result<()> {
    for (team, series) in scores {
        if let Some((week, &value)) = series.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(LuckError::NonFiniteScore {
                location: format!("week index {} for team {}", week, team),
                value,
            });
        }
    }
    Ok(())
}
