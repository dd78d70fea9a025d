//! Matchup loader
//!
//! Turns weekly head-to-head rows into a rectangular score table and real
//! win counts. All shape validation happens here so the expected-wins engine
//! can assume one score per team per week.

use crate::config::InputConfig;
use crate::error::{LuckError, Result};
use crate::types::{MatchupRecord, ScoreTable, SeasonRecords, WinTable};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const FIELDS_PER_ROW: usize = 5;

/// Load a season from a CSV file
pub fn load_season(config: &InputConfig) -> Result<SeasonRecords> {
    let path = config.path.as_path();
    info!("Loading matchups from: {}", path.display());

    let file = std::fs::File::open(path).map_err(|e| LuckError::io(path, e))?;
    load_season_from_reader(file, config)
}

/// Load a season from a CSV file at `path` using otherwise default input settings
pub fn load_season_from_path(path: impl AsRef<Path>) -> Result<SeasonRecords> {
    let config = InputConfig { path: path.as_ref().to_path_buf(), ..Default::default() };
    load_season(&config)
}

/// Load a season from any reader holding CSV matchup rows
pub fn load_season_from_reader<R: Read>(rdr: R, config: &InputConfig) -> Result<SeasonRecords> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter_byte()?)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut matchups = Vec::new();
    for result in reader.records() {
        let record = result?;
        matchups.push(parse_record(&record)?);
    }

    debug!("Parsed {} matchup rows", matchups.len());
    SeasonRecords::from_matchups(matchups)
}

fn parse_record(record: &csv::StringRecord) -> Result<MatchupRecord> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != FIELDS_PER_ROW {
        return Err(LuckError::malformed(
            line,
            format!("expected {} fields, found {}", FIELDS_PER_ROW, record.len()),
        ));
    }

    let field = |i: usize| record.get(i).unwrap_or_default();
    let week = field(0);
    let team_a = field(1);
    let team_b = field(3);

    if week.is_empty() {
        return Err(LuckError::malformed(line, "empty week identifier"));
    }
    if team_a.is_empty() || team_b.is_empty() {
        return Err(LuckError::malformed(line, "empty team name"));
    }

    let points_a = parse_points(line, team_a, field(2))?;
    let points_b = parse_points(line, team_b, field(4))?;

    Ok(MatchupRecord::new(week, team_a, points_a, team_b, points_b).at_line(line))
}

fn parse_points(line: u64, team: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(points) if points.is_finite() => Ok(points),
        _ => Err(LuckError::InvalidPoints {
            line,
            team: team.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// One week's worth of scores while the season is being assembled
struct WeekBucket {
    id: String,
    scores: HashMap<String, f64>,
}

impl WeekBucket {
    fn record(&mut self, team: &str, points: f64) -> Result<()> {
        if self.scores.insert(team.to_string(), points).is_some() {
            return Err(LuckError::DuplicateTeamInWeek {
                week: self.id.clone(),
                team: team.to_string(),
            });
        }
        Ok(())
    }
}

impl SeasonRecords {
    /// Accumulate matchup records into a season.
    ///
    /// Weeks are ordered numerically when every week identifier parses as a
    /// `u64`, otherwise by first appearance. Every team must play exactly
    /// once in every week.
    pub fn from_matchups<I>(matchups: I) -> Result<Self>
    where
        I: IntoIterator<Item = MatchupRecord>,
    {
        let mut buckets: Vec<WeekBucket> = Vec::new();
        let mut bucket_index: HashMap<String, usize> = HashMap::new();
        let mut actual_wins = WinTable::new();

        for matchup in matchups {
            if matchup.team_a == matchup.team_b {
                return Err(LuckError::malformed(
                    matchup.line,
                    format!("team {} is listed on both sides", matchup.team_a),
                ));
            }

            let idx = *bucket_index.entry(matchup.week.clone()).or_insert_with(|| {
                buckets.push(WeekBucket { id: matchup.week.clone(), scores: HashMap::new() });
                buckets.len() - 1
            });
            let bucket = &mut buckets[idx];
            bucket.record(&matchup.team_a, matchup.points_a)?;
            bucket.record(&matchup.team_b, matchup.points_b)?;

            actual_wins.entry(matchup.team_a.clone()).or_insert(0);
            actual_wins.entry(matchup.team_b.clone()).or_insert(0);

            match matchup.winner() {
                Some(winner) => {
                    if let Some(wins) = actual_wins.get_mut(winner) {
                        *wins += 1;
                    }
                }
                None => warn!(
                    "Week {}: {} and {} tied at {:.2}, no win awarded",
                    matchup.week, matchup.team_a, matchup.team_b, matchup.points_a
                ),
            }
        }

        if buckets.is_empty() {
            return Err(LuckError::EmptyInput);
        }

        order_weeks(&mut buckets);

        let mut scores: ScoreTable = BTreeMap::new();
        for team in actual_wins.keys() {
            let series: Vec<f64> =
                buckets.iter().filter_map(|bucket| bucket.scores.get(team).copied()).collect();
            if series.len() != buckets.len() {
                return Err(LuckError::MisalignedSeries {
                    team: team.clone(),
                    weeks: series.len(),
                    expected: buckets.len(),
                });
            }
            scores.insert(team.clone(), series);
        }

        let weeks: Vec<String> = buckets.into_iter().map(|bucket| bucket.id).collect();
        info!("Loaded {} teams over {} weeks", scores.len(), weeks.len());

        Ok(Self { weeks, scores, actual_wins })
    }
}

/// Sort weeks by numeric value when every identifier parses as a `u64`.
///
/// Weeks are grouped by their exact text, so `01` and `1` are two different
/// weeks. When both parse to the same number the stable sort keeps them in
/// order of first appearance. Any non-numeric identifier leaves the whole
/// season in order of first appearance.
fn order_weeks(buckets: &mut [WeekBucket]) {
    if buckets.iter().all(|b| b.id.parse::<u64>().is_ok()) {
        buckets.sort_by_key(|b| b.id.parse::<u64>().unwrap_or(u64::MAX));
    }
}
