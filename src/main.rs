//! fftrim
//!
//! Uses ffmpeg to trim the desired number of seconds from the start and end
//! of a file or group of files. Trimmed copies are written next to the
//! originals with a postfix inserted before the extension.
//!
//! # Usage
//!
//! ```bash
//! fftrim --start 10 --end 20 --input recording.ts
//! fftrim -s 30 -e 5 -i recordings/ --depth 2 --whitelist .ts .mkv --dryrun
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use fftrim::adapters::WhichToolkitLocator;
use fftrim::app::DefaultAppContainer;
use fftrim::cli::commands::{self, TOOLKIT_MISSING_MESSAGE};
use fftrim::cli::Cli;
use fftrim::config_initialization::initialize_configuration_hierarchy;
use fftrim::utils::logging::LoggingSystem;

/// Main entry point for the fftrim CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let working_dir = std::env::current_dir().context("Failed to read working directory")?;
    let settings = initialize_configuration_hierarchy(&cli, &working_dir)?;
    LoggingSystem::new(settings.logging.clone()).initialize()?;

    info!("Starting fftrim");

    let locator = WhichToolkitLocator::new();
    let (ffmpeg, ffprobe) = match commands::locate_toolkit(&locator, &settings) {
        Ok(programs) => programs,
        Err(e) => {
            error!("{}", e);
            println!("{}", TOOLKIT_MISSING_MESSAGE);
            std::process::exit(1);
        }
    };

    let container = DefaultAppContainer::new(ffmpeg, ffprobe);
    let report = commands::trim(&cli.trim, &settings, &container).await?;

    if cli.json {
        commands::print_report(&report)?;
    }

    // The overall result does not change the exit status.
    if report.success() {
        info!("fftrim completed successfully");
    } else {
        warn!("fftrim completed with failures");
    }
    Ok(())
}
