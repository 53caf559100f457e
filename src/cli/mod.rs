//! CLI module for fftrim
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;

pub use args::TrimArgs;

/// Uses ffmpeg to trim the desired number of seconds from the start and end
/// of a file or group of files.
#[derive(Parser, Debug)]
#[command(name = "fftrim")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub trim: TrimArgs,

    /// Config file [default: ./fftrim.toml when present]
    #[arg(long, env = "FFTRIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, env = "FFTRIM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// ffmpeg program to run [default: ffmpeg]
    #[arg(long, env = "FFTRIM_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// ffprobe program to run [default: ffprobe]
    #[arg(long, env = "FFTRIM_FFPROBE")]
    pub ffprobe: Option<PathBuf>,
}
