// TOML config adapter - Read-only run defaults from a TOML file

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{FfTrimError, FfTrimResult};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "fftrim.toml";

/// Values a config file may provide. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub postfix: Option<String>,
    pub depth: Option<u32>,
    pub whitelist: Option<Vec<String>>,
    pub ffmpeg: Option<PathBuf>,
    pub ffprobe: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    fftrim: FileSettings,
}

/// TOML configuration adapter
#[derive(Debug, Default)]
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Create new TOML config adapter
    pub fn new() -> Self {
        Self
    }

    /// Load settings from `explicit`, or from `fftrim.toml` in `working_dir`
    /// if it exists. An explicit path that does not exist is an error.
    pub fn discover(
        &self,
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> FfTrimResult<Option<FileSettings>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(FfTrimError::invalid_config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            return self.load(path).map(Some);
        }

        let fallback = working_dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return self.load(&fallback).map(Some);
        }

        Ok(None)
    }

    /// Load configuration from file
    pub fn load(&self, path: &Path) -> FfTrimResult<FileSettings> {
        info!("Loading configuration from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Deserialize config from TOML string
    fn parse(content: &str, path: &Path) -> FfTrimResult<FileSettings> {
        let parsed: ConfigFile = toml::from_str(content).map_err(|e| FfTrimError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(parsed.fftrim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_section() {
        let content = r#"
            [fftrim]
            postfix = "_cut"
            depth = 3
            whitelist = [".ts", ".mkv"]
            ffmpeg = "/opt/ffmpeg/bin/ffmpeg"
            log_level = "debug"
        "#;

        let settings = TomlConfigAdapter::parse(content, Path::new("fftrim.toml")).unwrap();
        assert_eq!(settings.postfix.as_deref(), Some("_cut"));
        assert_eq!(settings.depth, Some(3));
        assert_eq!(
            settings.whitelist,
            Some(vec![".ts".to_string(), ".mkv".to_string()])
        );
        assert_eq!(settings.ffmpeg, Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg")));
        assert_eq!(settings.ffprobe, None);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_file() {
        let settings = TomlConfigAdapter::parse("", Path::new("fftrim.toml")).unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = TomlConfigAdapter::parse("[fftrim]\ncrf = 18\n", Path::new("fftrim.toml"))
            .unwrap_err();
        assert!(matches!(err, FfTrimError::ConfigParse { .. }));
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = TomlConfigAdapter::new();
        let missing = temp_dir.path().join("nope.toml");
        assert!(adapter.discover(Some(&missing), temp_dir.path()).is_err());
    }

    #[test]
    fn test_discover_falls_back_to_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = TomlConfigAdapter::new();
        assert_eq!(adapter.discover(None, temp_dir.path()).unwrap(), None);

        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[fftrim]\npostfix = \"_short\"\n",
        )
        .unwrap();
        let settings = adapter.discover(None, temp_dir.path()).unwrap().unwrap();
        assert_eq!(settings.postfix.as_deref(), Some("_short"));
    }
}
