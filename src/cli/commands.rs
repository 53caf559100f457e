//! Command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::{AppContainer, Worklist};
use crate::cli::args::TrimArgs;
use crate::config_initialization::RunSettings;
use crate::domain::model::RunReport;
use crate::error::FfTrimResult;
use crate::ports::ToolkitLocator;

/// Printed when the external toolkit cannot be found
pub const TOOLKIT_MISSING_MESSAGE: &str = "This program requires ffmpeg to operate";

/// Resolve the ffmpeg and ffprobe programs before doing any work
pub fn locate_toolkit(
    locator: &dyn ToolkitLocator,
    settings: &RunSettings,
) -> FfTrimResult<(PathBuf, PathBuf)> {
    let ffmpeg = locator.locate(&settings.ffmpeg)?;
    let ffprobe = locator.locate(&settings.ffprobe)?;
    Ok((ffmpeg, ffprobe))
}

/// Execute the trim command
pub async fn trim(
    args: &TrimArgs,
    settings: &RunSettings,
    container: &dyn AppContainer,
) -> Result<RunReport> {
    let config = settings
        .trim_config(args)
        .context("Invalid trim configuration")?;

    info!("Input: {}", args.input.display());
    info!(
        "Trimming {}s from the start and {}s from the end",
        config.start_seconds, config.end_seconds
    );
    if config.dry_run {
        info!("Dry run: no files will be written or deleted");
    }

    let worklist = Worklist::build(&args.input, config.max_depth(), config.whitelist())
        .with_context(|| format!("Failed to collect files from {}", args.input.display()))?;

    container
        .trim_interactor()
        .run(&worklist, &config)
        .await
        .context("Trim run failed")
}

/// Print the run report as pretty JSON
pub fn print_report(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize run report to JSON")?;
    println!("{}", json);
    Ok(())
}
