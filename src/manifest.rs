//! Option manifests for the external compiler
//!
//! The compiler is driven through two fixed-name text files in the working
//! directory, passed on the command line as indirection arguments
//! (`@javacOptions`, `@javacSources`). Both files are truncated and
//! rewritten on every build, so manifest generation is idempotent for
//! unchanged inputs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WsBuildResult;

/// Manifest carrying the classpath and output-directory directives
pub const OPTIONS_FILE: &str = "javacOptions";

/// Manifest carrying one input source path per line
pub const SOURCES_FILE: &str = "javacSources";

/// Separator between classpath entries
const CLASSPATH_SEPARATOR: &str = ":";

/// Write the options manifest into the working directory.
///
/// Emits a `-classpath` line joining the given archive paths (no trailing
/// separator) when at least one is present, then always a `-d` line naming
/// the output directory. Returns whether the classpath line was written;
/// that flag decides whether the compiler invocation references this
/// manifest at all.
pub fn write_options(
    working_dir: &Path,
    output_dir: &Path,
    classpath: &[PathBuf],
) -> WsBuildResult<bool> {
    let mut content = String::new();
    let has_classpath = !classpath.is_empty();
    if has_classpath {
        let joined = classpath
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(CLASSPATH_SEPARATOR);
        content.push_str("-classpath ");
        content.push_str(&joined);
        content.push('\n');
    }
    content.push_str("-d ");
    content.push_str(&output_dir.display().to_string());
    content.push('\n');

    fs::write(working_dir.join(OPTIONS_FILE), content)?;
    Ok(has_classpath)
}

/// Write the source-list manifest into the working directory.
///
/// One absolute source path per line, in discovery order. Returns whether
/// any line was written; an empty set leaves a truncated manifest behind
/// and the compiler invocation omits the reference entirely.
pub fn write_sources(working_dir: &Path, sources: &[PathBuf]) -> WsBuildResult<bool> {
    let mut content = String::new();
    for path in sources {
        content.push_str(&path.display().to_string());
        content.push('\n');
    }

    fs::write(working_dir.join(SOURCES_FILE), content)?;
    Ok(!sources.is_empty())
}
