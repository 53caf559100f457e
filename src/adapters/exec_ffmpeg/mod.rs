//! FFmpeg execution adapter
//!
//! Performs the stream-copy trim by spawning `ffmpeg` and waiting for it.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::FfTrimResult;
use crate::ports::*;

/// Status reported when ffmpeg was terminated without an exit code
pub const SIGNALLED_STATUS: i32 = -1;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one trim, in the order ffmpeg expects them
    fn build_args(invocation: &TrimInvocation) -> Vec<std::ffi::OsString> {
        vec![
            "-loglevel".into(),
            "error".into(),
            "-i".into(),
            invocation.input.clone().into_os_string(),
            "-c".into(),
            "copy".into(),
            "-ss".into(),
            invocation.start.to_string().into(),
            "-t".into(),
            invocation.duration.to_string().into(),
            invocation.output.clone().into_os_string(),
        ]
    }
}

#[async_trait]
impl TrimPort for FFmpegAdapter {
    async fn trim(&self, invocation: &TrimInvocation) -> FfTrimResult<i32> {
        let args = Self::build_args(invocation);
        debug!(program = %self.program.display(), ?args, "Running ffmpeg");

        let status = Command::new(&self.program).args(&args).status().await?;
        Ok(status.code().unwrap_or(SIGNALLED_STATUS))
    }
}
