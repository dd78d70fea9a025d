//! Text bar charts for luck reports

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use luck_engine::{LuckReport, OutputConfig, TeamLuck};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

pub const LUCK_CHART_FILE: &str = "luck_scores.txt";
pub const WINS_CHART_FILE: &str = "wins_comparison.txt";
pub const REPORT_FILE: &str = "luck_report.json";

const LUCK_TITLE: &str = "Luck Scores by Team (Actual Wins - Expected Wins)";
const WINS_TITLE: &str = "Actual vs Expected Wins by Team";
const BAR: &str = "█";

/// Consumer of computed luck reports
pub trait ChartRenderer {
    /// Luck per team, luckiest first, colored by sign
    fn render_luck(&mut self, report: &LuckReport) -> Result<()>;

    /// Actual and expected wins side by side, teams in name order
    fn render_wins_comparison(&mut self, report: &LuckReport) -> Result<()>;
}

/// Draws horizontal bar charts into any writer
pub struct TextChartRenderer<W: Write> {
    out: W,
    colorize: bool,
    bar_width: usize,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W, colorize: bool, bar_width: usize) -> Self {
        Self { out, colorize, bar_width: bar_width.max(2) }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.colorize {
            text.color(color).to_string()
        } else {
            text
        }
    }

    fn title(&mut self, title: &str) -> Result<()> {
        let heading = if self.colorize { title.bold().to_string() } else { title.to_string() };
        writeln!(self.out, "{}", heading)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count()))?;
        Ok(())
    }
}

/// Bar length for `value` when `max` fills `width` cells
fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value.abs() / max) * width as f64).round().min(width as f64) as usize
}

fn name_width(rows: &[&TeamLuck]) -> usize {
    rows.iter().map(|row| row.team.chars().count()).max().unwrap_or(0)
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render_luck(&mut self, report: &LuckReport) -> Result<()> {
        let rows = report.by_luck_descending();
        let names = name_width(&rows);
        let half = self.bar_width / 2;
        let max = rows.iter().map(|row| row.luck.abs()).fold(0.0, f64::max);

        self.title(LUCK_TITLE)?;
        for row in rows {
            let len = bar_len(row.luck, max, half);
            let (left, right) = if row.is_lucky() {
                (" ".repeat(half), self.paint(BAR.repeat(len), Color::Green))
            } else {
                (
                    format!("{}{}", " ".repeat(half - len), self.paint(BAR.repeat(len), Color::Red)),
                    String::new(),
                )
            };
            let padding = " ".repeat(if row.is_lucky() { half - len } else { half });
            writeln!(
                self.out,
                "{:<names$} {}|{}{} {:+.2}",
                row.team,
                left,
                right,
                padding,
                row.luck,
                names = names
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn render_wins_comparison(&mut self, report: &LuckReport) -> Result<()> {
        let rows = report.alphabetical();
        let names = name_width(&rows);
        let width = self.bar_width;
        let max = rows
            .iter()
            .flat_map(|row| [f64::from(row.actual_wins), row.expected_wins])
            .fold(0.0, f64::max);

        self.title(WINS_TITLE)?;
        for row in rows {
            let actual_len = bar_len(f64::from(row.actual_wins), max, width);
            let expected_len = bar_len(row.expected_wins, max, width);
            let actual_bar = self.paint(BAR.repeat(actual_len), Color::Blue);
            let expected_bar = self.paint(BAR.repeat(expected_len), Color::Yellow);

            writeln!(
                self.out,
                "{:<names$} actual   |{}{} {}",
                row.team,
                actual_bar,
                " ".repeat(width - actual_len),
                row.actual_wins,
                names = names
            )?;
            writeln!(
                self.out,
                "{:<names$} expected |{}{} {:.2}",
                "",
                expected_bar,
                " ".repeat(width - expected_len),
                row.expected_wins,
                names = names
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Render every enabled artifact into memory, paired with its target path
pub fn render_artifacts(
    report: &LuckReport,
    config: &OutputConfig,
) -> Result<Vec<(PathBuf, Vec<u8>)>> {
    let mut artifacts = Vec::new();

    if config.write_charts {
        let mut renderer = TextChartRenderer::new(Vec::new(), false, config.bar_width);
        renderer.render_luck(report)?;
        artifacts.push((config.dir.join(LUCK_CHART_FILE), renderer.into_inner()));

        let mut renderer = TextChartRenderer::new(Vec::new(), false, config.bar_width);
        renderer.render_wins_comparison(report)?;
        artifacts.push((config.dir.join(WINS_CHART_FILE), renderer.into_inner()));
    }

    if config.write_report {
        let json = report.to_json().context("Failed to serialize luck report")?;
        artifacts.push((config.dir.join(REPORT_FILE), json.into_bytes()));
    }

    Ok(artifacts)
}

/// Write chart files and the JSON report into the output directory.
///
/// Nothing touches the disk until every artifact has rendered. If a write
/// fails, files already written by this call are removed again.
pub fn write_artifacts(report: &LuckReport, config: &OutputConfig) -> Result<Vec<PathBuf>> {
    let artifacts = render_artifacts(report, config)?;
    if artifacts.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("Failed to create output directory {}", config.dir.display()))?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
    for (path, contents) in artifacts {
        if let Err(e) = std::fs::write(&path, &contents) {
            remove_written(&written);
            return Err(e).with_context(|| format!("Failed to write {}", path.display()));
        }
        written.push(path);
    }

    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}

fn remove_written(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to remove partial output {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_report() -> LuckReport {
        let row = |team: &str, actual_wins: u32, expected_wins: f64| TeamLuck {
            team: team.to_string(),
            actual_wins,
            expected_wins,
            luck: f64::from(actual_wins) - expected_wins,
        };
        LuckReport {
            generated_at: Utc::now(),
            weeks: 3,
            teams: vec![
                row("Bears", 0, 0.0),
                row("Hawks", 2, 2.0),
                row("Lions", 3, 7.0 / 3.0),
                row("Wolves", 1, 5.0 / 3.0),
            ],
        }
    }

    fn render(f: impl FnOnce(&mut TextChartRenderer<Vec<u8>>) -> Result<()>) -> String {
        let mut renderer = TextChartRenderer::new(Vec::new(), false, 20);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_luck_chart_sorted_descending() {
        let out = render(|r| r.render_luck(&sample_report()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], LUCK_TITLE);
        assert!(lines[2].starts_with("Lions "));
        assert!(lines[2].ends_with("+0.67"));
        assert!(lines[5].starts_with("Wolves"));
        assert!(lines[5].ends_with("-0.67"));
    }

    #[test]
    fn test_luck_bars_sit_on_either_side_of_axis() {
        let out = render(|r| r.render_luck(&sample_report()));
        let lions = out.lines().find(|l| l.starts_with("Lions")).unwrap();
        let wolves = out.lines().find(|l| l.starts_with("Wolves")).unwrap();

        let (left, right) = lions.split_once('|').unwrap();
        assert!(!left.contains(BAR));
        assert_eq!(right.matches(BAR).count(), 10);

        let (left, right) = wolves.split_once('|').unwrap();
        assert_eq!(left.matches(BAR).count(), 10);
        assert!(!right.contains(BAR));

        let hawks = out.lines().find(|l| l.starts_with("Hawks")).unwrap();
        assert!(!hawks.contains(BAR));
    }

    #[test]
    fn test_wins_chart_alphabetical() {
        let out = render(|r| r.render_wins_comparison(&sample_report()));
        let teams: Vec<&str> = out
            .lines()
            .filter(|l| l.contains("actual   |"))
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(teams, vec!["Bears", "Hawks", "Lions", "Wolves"]);

        let lions_actual = out.lines().find(|l| l.starts_with("Lions")).unwrap();
        assert_eq!(lions_actual.matches(BAR).count(), 20);
        assert!(out.contains("2.33"));
    }

    #[test]
    fn test_colored_output_differs_from_plain() {
        colored::control::set_override(true);
        let mut renderer = TextChartRenderer::new(Vec::new(), true, 20);
        renderer.render_luck(&sample_report()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        colored::control::unset_override();

        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_write_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig { dir: dir.path().join("out"), ..Default::default() };

        let written = write_artifacts(&sample_report(), &config).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }

        let chart = std::fs::read_to_string(config.dir.join(LUCK_CHART_FILE)).unwrap();
        assert!(chart.starts_with(LUCK_TITLE));
        assert!(!chart.contains("\u{1b}["));

        let report = LuckReport::load(&config.dir.join(REPORT_FILE)).unwrap();
        assert_eq!(report.teams.len(), 4);
    }

    #[test]
    fn test_failed_report_write_leaves_no_charts() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig { dir: dir.path().join("out"), ..Default::default() };
        // A directory where the report file should go makes that write fail
        std::fs::create_dir_all(config.dir.join(REPORT_FILE)).unwrap();

        let err = write_artifacts(&sample_report(), &config).unwrap_err();
        assert!(err.to_string().contains(REPORT_FILE));

        assert!(!config.dir.join(LUCK_CHART_FILE).exists());
        assert!(!config.dir.join(WINS_CHART_FILE).exists());
        assert!(config.dir.join(REPORT_FILE).is_dir());
    }

    #[test]
    fn test_render_artifacts_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig { dir: dir.path().join("out"), ..Default::default() };

        let artifacts = render_artifacts(&sample_report(), &config).unwrap();
        let names: Vec<String> = artifacts
            .iter()
            .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![LUCK_CHART_FILE, WINS_CHART_FILE, REPORT_FILE]);
        assert!(artifacts.iter().all(|(_, contents)| !contents.is_empty()));
        assert!(!config.dir.exists());
    }

    #[test]
    fn test_write_artifacts_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            dir: dir.path().join("out"),
            write_charts: false,
            write_report: false,
            ..Default::default()
        };

        assert!(write_artifacts(&sample_report(), &config).unwrap().is_empty());
        assert!(!config.dir.exists());
    }
}
