//! FFprobe adapter for media duration probing
//!
//! Runs `ffprobe` once per file and reads the container duration from its
//! CSV output.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{FfTrimError, FfTrimResult};
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: PathBuf,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, file_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "-show_entries",
            "format=duration",
            "-v",
            "quiet",
            "-of",
            "csv=p=0",
        ])
        .arg(file_path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> FfTrimResult<u64> {
        if !file_path.is_file() {
            return Err(FfTrimError::not_found(file_path));
        }

        debug!("Probing duration of {}", file_path.display());
        let output = self.command(file_path).output().await?;

        if !output.status.success() {
            return Err(FfTrimError::ProbeFailed {
                path: file_path.to_path_buf(),
                message: format!(
                    "ffprobe exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_duration(&stdout).ok_or_else(|| FfTrimError::ProbeFailed {
            path: file_path.to_path_buf(),
            message: format!("unexpected duration output '{}'", stdout.trim()),
        })
    }
}

/// Parse ffprobe's duration output, truncating fractional seconds toward zero
fn parse_duration(stdout: &str) -> Option<u64> {
    let seconds = stdout.trim().parse::<f64>().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    Some(seconds.max(0.0).trunc() as u64)
}
