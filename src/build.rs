//! Build and cleanup orchestration
//!
//! The two public operations of the core. [`build`] turns freshly
//! generated stub sources into loadable artifacts by driving the external
//! compiler; [`clean_sources`] removes the well-known generated-artifacts
//! subtree between builds. Both take the configuration as an explicit
//! value and spawn exactly one blocking subprocess.

use std::path::Path;

use crate::config::BuildConfig;
use crate::discovery::eligible_files;
use crate::error::WsBuildResult;
use crate::manifest::{self, OPTIONS_FILE, SOURCES_FILE};
use crate::process::{run_blocking, ProcessOutcome};

/// Fixed directory name holding previously generated service bindings
pub const GENERATED_SERVICES_DIR: &str = "generatedServices";

/// What a completed build invocation produced.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Whether the options manifest carried a classpath line and was
    /// therefore referenced by the invocation
    pub classpath_written: bool,
    /// Whether the source-list manifest carried any path and was
    /// therefore referenced by the invocation
    pub sources_written: bool,
    /// Exit status and combined output of the compiler subprocess.
    ///
    /// A non-zero status is not an error from this core; callers that
    /// want to reject failed compilations check it here.
    pub process: ProcessOutcome,
}

/// Compile the discovered sources against the discovered libraries.
///
/// Discovers eligible children of the library and source directories,
/// rewrites both manifests in the working directory, then invokes
/// `<compiler> [@javacOptions] [@javacSources]` with cwd set to the
/// working directory and blocks until it exits. Each indirection argument
/// appears only when its manifest reported content; with neither, the
/// compiler is still invoked bare.
pub fn build(config: &BuildConfig) -> WsBuildResult<BuildOutcome> {
    let archives = eligible_files(config.lib_dir())?;
    let classpath_written =
        manifest::write_options(config.working_dir(), config.output_dir(), &archives)?;

    let sources = eligible_files(config.source_dir())?;
    let sources_written = manifest::write_sources(config.working_dir(), &sources)?;

    let mut args = Vec::new();
    if classpath_written {
        args.push(format!("@{OPTIONS_FILE}"));
    }
    if sources_written {
        args.push(format!("@{SOURCES_FILE}"));
    }

    let process = run_blocking(config.compiler(), &args, config.working_dir())?;
    Ok(BuildOutcome {
        classpath_written,
        sources_written,
        process,
    })
}

/// Remove the generated-artifacts subtree under `target_dir`.
///
/// Runs `rm -R generatedServices` with cwd set to `target_dir` and blocks
/// until it exits. Irreversible: the caller must make sure `target_dir`
/// scopes the fixed subtree name to the intended artifacts. The remove
/// tool's own failure (subtree absent, permissions) is reported through
/// the outcome, not as an error.
pub fn clean_sources(target_dir: &Path) -> WsBuildResult<ProcessOutcome> {
    let args = ["-R".to_string(), GENERATED_SERVICES_DIR.to_string()];
    run_blocking("rm", &args, target_dir)
}
