//! wsbuild - dynamic compile orchestration for generated client stubs
//!
//! wsbuild drives an external compiler toolchain over freshly generated
//! web-service stub sources: it discovers eligible source and library
//! files, materializes the compiler's option manifests in a working
//! directory, invokes the toolchain as a blocking subprocess with merged
//! output streams, and can purge previously generated service artifacts
//! between builds.

pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod process;

// Re-exports for convenience
pub use build::{build, clean_sources, BuildOutcome, GENERATED_SERVICES_DIR};
pub use config::{BuildConfig, GeneratedStubs, Settings, DEFAULT_COMPILER};
pub use discovery::{eligible_files, ARCHIVE_SUFFIX, SOURCE_SUFFIX};
pub use error::{WsBuildError, WsBuildResult};
pub use manifest::{OPTIONS_FILE, SOURCES_FILE};
pub use process::{run_blocking, ProcessOutcome};
