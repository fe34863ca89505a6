//! Build configuration for wsbuild
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Settings file (`wsbuild.toml`)
//! 3. Built-in defaults (everything rooted at the current directory)
//!
//! `BuildConfig` is a plain value: each build or cleanup operation receives
//! it explicitly, so concurrent independent builds only need independent
//! configs with disjoint working directories.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{WsBuildError, WsBuildResult};

/// Default external compiler executable
pub const DEFAULT_COMPILER: &str = "javac";

/// Descriptor handed over by the upstream stub generator.
///
/// The generator declares where it emitted sources (`output_root`) and the
/// dotted package namespace it emitted them under; the source directory is
/// derived by joining the two with package components mapped to path
/// segments (`a.b.c` under `/gen` yields `/gen/a/b/c`).
#[derive(Debug, Clone)]
pub struct GeneratedStubs {
    /// Output root declared by the generator, if any
    pub output_root: Option<PathBuf>,
    /// Dotted package namespace the stubs were emitted under
    pub package: String,
}

/// Directory roles and toolchain selection for one orchestration session.
///
/// All four directories are always absolute. The working and output
/// directories are created on assignment; the source and library
/// directories are only resolved, so an absent directory surfaces later
/// as a discovery error during [`build`](crate::build::build).
#[derive(Debug, Clone)]
pub struct BuildConfig {
    working_dir: PathBuf,
    source_dir: PathBuf,
    lib_dir: PathBuf,
    output_dir: PathBuf,
    compiler: String,
}

impl BuildConfig {
    /// Create a config with every directory rooted at the current directory
    pub fn new() -> WsBuildResult<Self> {
        let current = env::current_dir()?;
        Ok(Self {
            working_dir: current.clone(),
            source_dir: current.clone(),
            lib_dir: current.clone(),
            output_dir: current,
            compiler: DEFAULT_COMPILER.to_string(),
        })
    }

    /// Working directory: hosts the option manifests and the compiler cwd.
    ///
    /// Created (with missing ancestors) if absent.
    pub fn set_working_dir(&mut self, path: impl AsRef<Path>) -> WsBuildResult<()> {
        let abs = absolutize(path.as_ref())?;
        fs::create_dir_all(&abs)?;
        self.working_dir = abs;
        Ok(())
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Output directory: where compiled artifacts land (`-d`).
    ///
    /// Created (with missing ancestors) if absent.
    pub fn set_output_dir(&mut self, path: impl AsRef<Path>) -> WsBuildResult<()> {
        let abs = absolutize(path.as_ref())?;
        fs::create_dir_all(&abs)?;
        self.output_dir = abs;
        Ok(())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Source directory: where the generator wrote the stub sources.
    ///
    /// Resolved to absolute form, never created.
    pub fn set_source_dir(&mut self, path: impl AsRef<Path>) -> WsBuildResult<()> {
        self.source_dir = absolutize(path.as_ref())?;
        Ok(())
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Library directory: where supporting archives live (`-classpath`).
    ///
    /// Resolved to absolute form, never created.
    pub fn set_lib_dir(&mut self, path: impl AsRef<Path>) -> WsBuildResult<()> {
        self.lib_dir = absolutize(path.as_ref())?;
        Ok(())
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    /// Derive the source directory from a generator descriptor.
    ///
    /// The package path is appended to the declared output root, or to the
    /// currently configured source directory when the generator declared
    /// none.
    pub fn set_source_dir_from_stubs(&mut self, stubs: &GeneratedStubs) -> WsBuildResult<()> {
        let mut dir = match &stubs.output_root {
            Some(root) => root.clone(),
            None => self.source_dir.clone(),
        };
        for segment in stubs.package.split('.').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        self.source_dir = absolutize(&dir)?;
        Ok(())
    }

    /// External compiler executable name
    pub fn set_compiler(&mut self, compiler: impl Into<String>) {
        self.compiler = compiler.into();
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }
}

/// Resolve a path to absolute form against the current directory
fn absolutize(path: &Path) -> WsBuildResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Settings file (`wsbuild.toml`) contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub directories: DirectorySettings,

    #[serde(default)]
    pub toolchain: ToolchainSettings,

    /// Generator descriptor; when present, derives the source directory
    pub generator: Option<GeneratorSettings>,
}

/// Directory-role overrides from the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    pub working: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub lib: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Toolchain overrides from the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolchainSettings {
    pub compiler: Option<String>,
}

/// `[generator]` table of the settings file
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub output_root: Option<PathBuf>,
    pub package: String,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> WsBuildResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| WsBuildError::InvalidSettings {
            file: path.to_path_buf(),
            source,
        })
    }

    /// Apply these settings onto a config.
    ///
    /// An explicit `directories.source` wins over a `[generator]` table.
    pub fn apply(&self, config: &mut BuildConfig) -> WsBuildResult<()> {
        if let Some(dir) = &self.directories.working {
            config.set_working_dir(dir)?;
        }
        if let Some(dir) = &self.directories.output {
            config.set_output_dir(dir)?;
        }
        if let Some(dir) = &self.directories.lib {
            config.set_lib_dir(dir)?;
        }
        if let Some(dir) = &self.directories.source {
            config.set_source_dir(dir)?;
        } else if let Some(generator) = &self.generator {
            config.set_source_dir_from_stubs(&GeneratedStubs {
                output_root: generator.output_root.clone(),
                package: generator.package.clone(),
            })?;
        }
        if let Some(compiler) = &self.toolchain.compiler {
            config.set_compiler(compiler.clone());
        }
        Ok(())
    }
}
