use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use luck_chart::{
    ChartRenderer, Cli, TextChartRenderer, initialize_logging_with_config, write_artifacts,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;

    initialize_logging_with_config(&config.logging)?;
    info!("Starting luck-chart v{}", luck_engine::VERSION);

    let report = match luck_engine::analyze_file(&config.input) {
        Ok(report) => report,
        Err(e) => {
            if e.is_input_error() {
                error!("Input rejected: {}", e);
            }
            return Err(e).with_context(|| {
                format!("Failed to analyze {}", config.input.path.display())
            });
        }
    };

    write_artifacts(&report, &config.output).context("Failed to write chart artifacts")?;

    if config.output.print_charts {
        let stdout = std::io::stdout().lock();
        let mut renderer = TextChartRenderer::new(stdout, true, config.output.bar_width);
        renderer.render_luck(&report)?;
        renderer.render_wins_comparison(&report)?;
    }

    info!("Done");
    Ok(())
}
