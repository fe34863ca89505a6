//! Eligible-file discovery
//!
//! A build consults two directories: the library directory for packaged
//! archives and the source directory for generated stub sources. Both
//! passes apply the same suffix rule and look only at immediate children.
//! Results are recomputed on every call; nothing is cached.

use std::path::{Path, PathBuf};

use crate::error::{WsBuildError, WsBuildResult};

/// Suffix of generated stub source files
pub const SOURCE_SUFFIX: &str = ".java";

/// Suffix of packaged library archives
pub const ARCHIVE_SUFFIX: &str = ".jar";

/// List the absolute paths of a directory's immediate children whose name
/// carries a recognized suffix.
///
/// The order is whatever the platform's directory listing yields; callers
/// must not rely on it. An unreadable or absent directory is an error; a
/// readable directory with no eligible children yields an empty set.
pub fn eligible_files(dir: &Path) -> WsBuildResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|_| WsBuildError::DirectoryNotFound {
        path: dir.to_path_buf(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if is_eligible(&entry.file_name().to_string_lossy()) {
            files.push(dir.join(entry.file_name()));
        }
    }
    Ok(files)
}

fn is_eligible(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX) || name.ends_with(ARCHIVE_SUFFIX)
}
