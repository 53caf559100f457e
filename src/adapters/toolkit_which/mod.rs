//! Toolkit locator backed by the `which` crate

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FfTrimError, FfTrimResult};
use crate::ports::ToolkitLocator;

/// Resolves bare program names against `PATH`; explicit paths are checked
/// as given
#[derive(Debug, Default)]
pub struct WhichToolkitLocator;

impl WhichToolkitLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolkitLocator for WhichToolkitLocator {
    fn locate(&self, program: &Path) -> FfTrimResult<PathBuf> {
        let path = which::which(program).map_err(|_| FfTrimError::ToolkitNotFound {
            program: program.display().to_string(),
        })?;
        debug!("Resolved {} to {}", program.display(), path.display());
        Ok(path)
    }
}
