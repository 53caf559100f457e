// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::model::Timecode;
use crate::error::FfTrimResult;

/// Port for media duration probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Duration of the media at `file_path` in whole seconds, truncated
    /// toward zero. Fails with `NotFound` if the file does not exist.
    async fn probe_duration(&self, file_path: &Path) -> FfTrimResult<u64>;
}

/// Everything the trim step needs for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimInvocation {
    pub input: PathBuf,
    pub start: Timecode,
    pub duration: Timecode,
    pub output: PathBuf,
}

/// Port for the stream-copy trim
#[async_trait]
pub trait TrimPort: Send + Sync {
    /// Run the trim and return the tool's exit status (0 = success).
    ///
    /// An `Err` means the tool could not be run at all.
    async fn trim(&self, invocation: &TrimInvocation) -> FfTrimResult<i32>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if a regular file exists
    async fn file_exists(&self, file_path: &Path) -> FfTrimResult<bool>;

    /// Delete file
    async fn delete_file(&self, file_path: &Path) -> FfTrimResult<()>;
}

/// Port for locating external programs before any work starts
pub trait ToolkitLocator: Send + Sync {
    /// Resolve `program` (a bare name or a path) to an executable path
    fn locate(&self, program: &Path) -> FfTrimResult<PathBuf>;

    /// Resolve every program, failing on the first one missing
    fn locate_all(&self, programs: &[&Path]) -> FfTrimResult<Vec<PathBuf>> {
        programs.iter().map(|program| self.locate(program)).collect()
    }
}
