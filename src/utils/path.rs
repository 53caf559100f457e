//! Path naming helpers

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension of `path` including the leading dot, or an empty string.
///
/// Only the final suffix counts: `archive.tar.gz` yields `.gz`, and a
/// dot-file such as `.bashrc` has no extension.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Insert `postfix` between the file stem and its extension.
///
/// `clip.ts` with `_trimmed` becomes `clip_trimmed.ts`; `clip` becomes
/// `clip_trimmed`. The parent directory is preserved.
pub fn with_postfix(path: &Path, postfix: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(postfix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
