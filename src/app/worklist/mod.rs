// Worklist builder - Collects the files a run will trim

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::domain::model::Whitelist;
use crate::error::{FfTrimError, FfTrimResult};

/// Ordered list of files queued for trimming.
///
/// Order is the directory visitation order, which follows whatever the
/// platform's directory listing returns. Entries are never sorted or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklist {
    items: Vec<PathBuf>,
}

impl Worklist {
    /// Create an empty worklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the worklist for `root`.
    ///
    /// A regular file becomes the only entry and is not checked against the
    /// whitelist. A directory is walked up to `max_depth` levels, keeping
    /// whitelisted files only. Anything else is `NotFound`.
    pub fn build(root: &Path, max_depth: u32, whitelist: &Whitelist) -> FfTrimResult<Self> {
        if max_depth < 1 {
            return Err(FfTrimError::invalid_config(format!(
                "depth must be at least 1, got {}",
                max_depth
            )));
        }

        let mut worklist = Self::new();
        if root.is_file() {
            worklist.add_file(root);
        } else if root.is_dir() {
            worklist.add_dir(root, max_depth, whitelist)?;
        } else {
            return Err(FfTrimError::not_found(root));
        }

        info!(
            "Worklist for {} contains {} file(s)",
            root.display(),
            worklist.len()
        );
        Ok(worklist)
    }

    /// Append the whitelisted files under `path`.
    ///
    /// A budget of 1 means the directory's own files only; each extra level
    /// allows one more level of subdirectories. Returns `Ok(false)` without
    /// touching the list when the budget is zero or `path` is not a directory.
    pub fn add_dir(
        &mut self,
        path: &Path,
        depth_budget: u32,
        whitelist: &Whitelist,
    ) -> FfTrimResult<bool> {
        if depth_budget < 1 || !path.is_dir() {
            return Ok(false);
        }

        let found = collect_dir(path, depth_budget, whitelist)?;
        debug!("Found {} file(s) under {}", found.len(), path.display());
        self.items.extend(found);
        Ok(true)
    }

    /// Append a single file without consulting any whitelist.
    ///
    /// Returns false and leaves the list untouched if `path` is not a
    /// regular file.
    pub fn add_file(&mut self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        self.items.push(path.to_path_buf());
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<PathBuf> for Worklist {
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Worklist {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Depth-first walk of `root` in listing order. Directories deeper than
/// `depth_budget` are never opened.
fn collect_dir(root: &Path, depth_budget: u32, whitelist: &Whitelist) -> FfTrimResult<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(depth_budget as usize)
        .follow_links(true);

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                warn!("Skipping symlink loop: {}", err);
                continue;
            }
            Err(err) if is_dangling_link(&err) => {
                debug!("Skipping dangling link: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        // Subdirectories within budget are descended by the walker itself.
        if !entry.file_type().is_file() {
            continue;
        }

        if !whitelist.allows(entry.path()) {
            warn!(
                "{} is not in the whitelist. Skipping.",
                entry.file_name().to_string_lossy()
            );
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .map(|io| io.kind() == std::io::ErrorKind::NotFound)
            .unwrap_or(false)
}
