// Local filesystem adapter - File system operations backed by std::fs

use std::fs;
use std::path::Path;

use async_trait::async_trait;

use crate::error::FfTrimResult;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn file_exists(&self, file_path: &Path) -> FfTrimResult<bool> {
        Ok(file_path.is_file())
    }

    async fn delete_file(&self, file_path: &Path) -> FfTrimResult<()> {
        fs::remove_file(file_path)?;
        Ok(())
    }
}
