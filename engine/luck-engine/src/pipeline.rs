use crate::config::InputConfig;
use crate::error::{LuckError, Result};
use crate::expected::compute_expected_wins;
use crate::loader::load_season;
use crate::luck::compute_luck;
use crate::report::LuckReport;
use crate::types::SeasonRecords;
use tracing::{debug, info};

/// Run expected wins and luck over an already loaded season
pub fn analyze(season: &SeasonRecords) -> Result<LuckReport> {
    check_week_count(season)?;
    let expected = compute_expected_wins(&season.scores)?;
    let luck = compute_luck(&season.actual_wins, &expected)?;

    for (team, score) in &luck {
        debug!(
            "{}: actual {} expected {:.3} luck {:+.3}",
            team, season.actual_wins[team], expected[team], score
        );
    }

    let report =
        LuckReport::from_tables(season.week_count(), &season.actual_wins, &expected, &luck)?;
    info!("Luck computed for {} teams", report.teams.len());
    Ok(report)
}

/// Every series must cover exactly the listed weeks
fn check_week_count(season: &SeasonRecords) -> Result<()> {
    let expected = season.week_count();
    match season.scores.iter().find(|(_, series)| series.len() != expected) {
        Some((team, series)) => Err(LuckError::MisalignedSeries {
            team: team.clone(),
            weeks: series.len(),
            expected,
        }),
        None => Ok(()),
    }
}

/// Load a season from CSV and analyze it
pub fn analyze_file(config: &InputConfig) -> Result<LuckReport> {
    let season = load_season(config)?;
    analyze(&season)
}
