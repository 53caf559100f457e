//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments describing what to trim and how
#[derive(Args, Debug, Clone)]
pub struct TrimArgs {
    /// The number of seconds to trim from the start of the video
    #[arg(short, long)]
    pub start: u64,

    /// The number of seconds to trim from the end of the video
    #[arg(short, long)]
    pub end: u64,

    /// The input file or directory containing the files you want to process
    #[arg(short, long)]
    pub input: PathBuf,

    /// The string to append to a processed file as its output name [default: _trimmed]
    #[arg(short, long, env = "FFTRIM_POSTFIX")]
    pub postfix: Option<String>,

    /// If a directory is specified, how many directory levels to collect files from [default: 1]
    #[arg(short, long, env = "FFTRIM_DEPTH", value_parser = parse_depth)]
    pub depth: Option<u32>,

    /// Runs without actually trimming any of the videos
    #[arg(long)]
    pub dryrun: bool,

    /// Override the whitelist of acceptable extensions (e.g. --whitelist .ts .mpeg).
    /// Only used when adding files from a directory [default: .ts .mpg]
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub whitelist: Option<Vec<String>>,

    /// USE WITH CAUTION. Deletes the original file after successfully trimming it
    #[arg(long)]
    pub delete_original: bool,
}

fn parse_depth(s: &str) -> Result<u32, String> {
    clap_num::number_range(s, 1, u32::MAX)
}
