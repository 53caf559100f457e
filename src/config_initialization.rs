//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use crate::adapters::toml_config::{FileSettings, TomlConfigAdapter};
use crate::cli::{Cli, TrimArgs};
use crate::domain::model::{
    TrimConfig, Whitelist, DEFAULT_MAX_DEPTH, DEFAULT_POSTFIX, DEFAULT_WHITELIST,
};
use crate::error::FfTrimResult;
use crate::utils::logging::{LogLevel, LoggingConfig};

/// Settings resolved from every configuration layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub postfix: String,
    pub depth: u32,
    pub whitelist: Vec<String>,
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub logging: LoggingConfig,
}

impl RunSettings {
    /// Combine resolved settings with the per-run trim arguments
    pub fn trim_config(&self, args: &TrimArgs) -> FfTrimResult<TrimConfig> {
        Ok(
            TrimConfig::new(args.start, args.end, self.postfix.clone(), self.depth)?
                .with_whitelist(Whitelist::new(self.whitelist.iter().cloned()))
                .with_dry_run(args.dryrun)
                .with_delete_original(args.delete_original),
        )
    }
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults.
///
/// The environment layer is folded into `cli` by clap.
pub fn initialize_configuration_hierarchy(cli: &Cli, working_dir: &Path) -> FfTrimResult<RunSettings> {
    let file = TomlConfigAdapter::new()
        .discover(cli.config.as_deref(), working_dir)?
        .unwrap_or_default();
    resolve_settings(cli, file)
}

/// Apply CLI overrides on top of file values, then defaults
pub fn resolve_settings(cli: &Cli, file: FileSettings) -> FfTrimResult<RunSettings> {
    let level = match cli.log_level.as_deref().or(file.log_level.as_deref()) {
        Some(level) => level.parse::<LogLevel>()?,
        None => LogLevel::default(),
    };

    Ok(RunSettings {
        postfix: cli
            .trim
            .postfix
            .clone()
            .or(file.postfix)
            .unwrap_or_else(|| DEFAULT_POSTFIX.to_string()),
        depth: cli.trim.depth.or(file.depth).unwrap_or(DEFAULT_MAX_DEPTH),
        whitelist: cli
            .trim
            .whitelist
            .clone()
            .or(file.whitelist)
            .unwrap_or_else(|| DEFAULT_WHITELIST.iter().map(|ext| ext.to_string()).collect()),
        ffmpeg: cli
            .ffmpeg
            .clone()
            .or(file.ffmpeg)
            .unwrap_or_else(|| PathBuf::from("ffmpeg")),
        ffprobe: cli
            .ffprobe
            .clone()
            .or(file.ffprobe)
            .unwrap_or_else(|| PathBuf::from("ffprobe")),
        logging: LoggingConfig {
            level,
            format: cli.log_format,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FfTrimError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["fftrim", "-s", "10", "-e", "20", "-i", "videos"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = resolve_settings(&parse(&[]), FileSettings::default()).unwrap();
        assert_eq!(settings.postfix, "_trimmed");
        assert_eq!(settings.depth, 1);
        assert_eq!(settings.whitelist, [".ts", ".mpg"]);
        assert_eq!(settings.ffmpeg, PathBuf::from("ffmpeg"));
        assert_eq!(settings.ffprobe, PathBuf::from("ffprobe"));
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileSettings {
            postfix: Some("_cut".to_string()),
            depth: Some(4),
            whitelist: Some(vec![".mkv".to_string()]),
            log_level: Some("debug".to_string()),
            ..FileSettings::default()
        };
        let settings = resolve_settings(&parse(&[]), file).unwrap();
        assert_eq!(settings.postfix, "_cut");
        assert_eq!(settings.depth, 4);
        assert_eq!(settings.whitelist, [".mkv"]);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileSettings {
            postfix: Some("_cut".to_string()),
            depth: Some(4),
            ..FileSettings::default()
        };
        let cli = parse(&["-p", "_short", "-d", "2", "--whitelist", ".ts", ".mp4"]);
        let settings = resolve_settings(&cli, file).unwrap();
        assert_eq!(settings.postfix, "_short");
        assert_eq!(settings.depth, 2);
        assert_eq!(settings.whitelist, [".ts", ".mp4"]);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let err = resolve_settings(&parse(&["--log-level", "loud"]), FileSettings::default())
            .unwrap_err();
        assert!(matches!(err, FfTrimError::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_postfix_fails_trim_config() {
        let cli = parse(&["--postfix", ""]);
        let settings = resolve_settings(&cli, FileSettings::default()).unwrap();
        assert!(settings.trim_config(&cli.trim).is_err());
    }

    #[test]
    fn test_trim_config_carries_flags() {
        let cli = parse(&["--dryrun", "--delete-original"]);
        let settings = resolve_settings(&cli, FileSettings::default()).unwrap();
        let config = settings.trim_config(&cli.trim).unwrap();
        assert!(config.dry_run);
        assert!(config.delete_original);
        assert_eq!(config.start_seconds, 10);
        assert_eq!(config.end_seconds, 20);
    }

    #[test]
    fn test_hierarchy_reads_working_dir_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("fftrim.toml"),
            "[fftrim]\ndepth = 3\n",
        )
        .unwrap();

        let settings = initialize_configuration_hierarchy(&parse(&[]), temp_dir.path()).unwrap();
        assert_eq!(settings.depth, 3);
    }
}
