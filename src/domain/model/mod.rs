// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::error::{FfTrimError, FfTrimResult};
use crate::utils::path::dotted_extension;

/// Postfix used when none is configured
pub const DEFAULT_POSTFIX: &str = "_trimmed";

/// Directory depth used when none is configured
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// Extensions accepted during directory traversal when none are configured
pub const DEFAULT_WHITELIST: [&str; 2] = [".ts", ".mpg"];

/// Whole-second timecode rendered as `HH:MM:SS`.
///
/// Hours are zero-padded to two digits but never wrapped, so a value of
/// 100 hours renders as `100:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timecode {
    pub seconds: u64,
}

impl Timecode {
    /// Create a timecode from whole seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Split into (hours, minutes, seconds)
    pub fn components(&self) -> (u64, u64, u64) {
        let (minutes, seconds) = (self.seconds / 60, self.seconds % 60);
        (minutes / 60, minutes % 60, seconds)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = self.components();
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Set of file extensions accepted during directory traversal.
///
/// Each entry includes the leading separator (`.ts`, not `ts`) and matching
/// is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Whitelist {
    extensions: Vec<String>,
}

impl Whitelist {
    /// Build a whitelist from user-supplied extensions
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extensions: Vec<String> = extensions.into_iter().map(Into::into).collect();
        for ext in extensions.iter().filter(|ext| !ext.starts_with('.')) {
            warn!("Whitelist entry '{}' has no leading '.' and will never match", ext);
        }
        Self { extensions }
    }

    /// Whether the extension of `path` is whitelisted
    pub fn allows(&self, path: &Path) -> bool {
        let extension = dotted_extension(path);
        self.extensions.iter().any(|allowed| *allowed == extension)
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(DEFAULT_WHITELIST)
    }
}

/// Immutable per-run trimming parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrimConfig {
    pub start_seconds: u64,
    pub end_seconds: u64,
    postfix: String,
    whitelist: Whitelist,
    max_depth: u32,
    pub dry_run: bool,
    pub delete_original: bool,
}

impl TrimConfig {
    /// Create a new trim configuration with validation.
    ///
    /// Fails when `postfix` is empty or `max_depth` is zero.
    pub fn new(
        start_seconds: u64,
        end_seconds: u64,
        postfix: impl Into<String>,
        max_depth: u32,
    ) -> FfTrimResult<Self> {
        let postfix = postfix.into();
        if postfix.is_empty() {
            return Err(FfTrimError::invalid_config("postfix cannot be empty"));
        }
        if max_depth < 1 {
            return Err(FfTrimError::invalid_config(format!(
                "depth must be at least 1, got {}",
                max_depth
            )));
        }

        Ok(Self {
            start_seconds,
            end_seconds,
            postfix,
            whitelist: Whitelist::default(),
            max_depth,
            dry_run: false,
            delete_original: false,
        })
    }

    /// Replace the extension whitelist
    pub fn with_whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = whitelist;
        self
    }

    /// Compute timecodes without invoking the trim step
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Delete each source after its trim succeeds
    pub fn with_delete_original(mut self, delete_original: bool) -> Self {
        self.delete_original = delete_original;
        self
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Timecode passed as the start offset for every file
    pub fn start_timecode(&self) -> Timecode {
        Timecode::from_seconds(self.start_seconds)
    }
}

/// Outcome of processing a single worklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrimOutcome {
    /// Trimmed copy written
    Trimmed {
        output: PathBuf,
        original_deleted: bool,
    },
    /// Timecodes computed, trim step skipped
    DryRun { duration: Timecode },
    /// ffmpeg reported a non-zero status
    Failed { status: i32 },
}

impl TrimOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, TrimOutcome::Failed { .. })
    }
}

/// Per-file entry of a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub start: Timecode,
    #[serde(flatten)]
    pub outcome: TrimOutcome,
}

/// Reason the whole run stopped before reaching the end of the worklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbortReason {
    pub input: PathBuf,
    pub duration_seconds: u64,
    pub requested_seconds: u64,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot trim {}s from {} which is only {}s long",
            self.requested_seconds,
            self.input.display(),
            self.duration_seconds
        )
    }
}

/// Result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub aborted: Option<AbortReason>,
}

impl RunReport {
    /// True iff the run was not aborted and no file failed
    pub fn success(&self) -> bool {
        self.aborted.is_none() && !self.files.iter().any(|file| file.outcome.is_failure())
    }

    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.outcome.is_failure()).count()
    }
}

#[cfg(test)]
mod tests;
