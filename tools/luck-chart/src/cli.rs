//! # Command Line Interface

use clap::Parser;
use luck_engine::LuckConfig;
use std::path::PathBuf;

/// Luck scores for a fantasy football season
#[derive(Parser, Debug)]
#[command(name = "luck-chart")]
#[command(version)]
#[command(about = "Compare actual wins with expected wins for every team in a league")]
pub struct Cli {
    /// Matchup CSV: week,team1,points1,team2,points2
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for chart and report files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults) overlaid with flags
    pub fn resolve_config(&self) -> luck_engine::Result<LuckConfig> {
        let mut config = match &self.config {
            Some(path) => LuckConfig::load_from_file(path)?,
            None => LuckConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luck_engine::config::DEFAULT_INPUT_FILE;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["luck-chart"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.input.path, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.output.dir, PathBuf::from("."));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("luck.toml");
        std::fs::write(
            &config_path,
            "[input]\npath = \"from_file.csv\"\n\n[output]\ndir = \"file_out\"\nbar_width = 10\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "luck-chart",
            "season.csv",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.input.path, PathBuf::from("season.csv"));
        assert_eq!(config.output.dir, PathBuf::from("file_out"));
        assert_eq!(config.output.bar_width, 10);

        let cli = Cli::try_parse_from(["luck-chart", "-o", "charts"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap().output.dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["luck-chart", "--week", "3"]).is_err());
    }
}
