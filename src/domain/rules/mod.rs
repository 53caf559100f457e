// Domain rules - Trim arithmetic and output naming

use std::path::{Path, PathBuf};

use crate::domain::model::{TrimConfig, Timecode};
use crate::utils::path::with_postfix;

/// Timecodes handed to the trim step for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimWindow {
    /// Offset into the source where the copy starts
    pub start: Timecode,
    /// Length of the copy (a duration, not a clock time)
    pub duration: Timecode,
}

/// Compute the trim window for a source of `duration_seconds`.
///
/// Returns `None` when the requested trim leaves nothing of the source.
pub fn plan_trim(config: &TrimConfig, duration_seconds: u64) -> Option<TrimWindow> {
    let requested = requested_seconds(config);
    if duration_seconds <= requested {
        return None;
    }

    Some(TrimWindow {
        start: config.start_timecode(),
        duration: Timecode::from_seconds(duration_seconds - requested),
    })
}

/// Total number of seconds removed from each file
pub fn requested_seconds(config: &TrimConfig) -> u64 {
    config.start_seconds.saturating_add(config.end_seconds)
}

/// Where the trimmed copy of `input` is written
pub fn output_path(config: &TrimConfig, input: &Path) -> PathBuf {
    with_postfix(input, config.postfix())
}
