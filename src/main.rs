//! wsbuild CLI - dynamic compile orchestration for generated client stubs
//!
//! Usage: wsbuild <COMMAND>
//!
//! Commands:
//!   build   Compile discovered stub sources against discovered libraries
//!   clean   Remove the generated-artifacts subtree under a directory

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wsbuild::{build, clean_sources, BuildConfig, GeneratedStubs, Settings};

/// wsbuild - dynamic compile orchestration for generated client stubs
#[derive(Parser, Debug)]
#[command(name = "wsbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile discovered stub sources against discovered libraries
    Build {
        /// Path to a settings file (defaults to ./wsbuild.toml when present)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Working directory for manifests and the compiler process
        #[arg(short, long)]
        working_dir: Option<PathBuf>,

        /// Directory holding the generated stub sources
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        /// Directory holding supporting library archives
        #[arg(short, long)]
        lib_dir: Option<PathBuf>,

        /// Directory receiving compiled artifacts
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// External compiler executable
        #[arg(long)]
        compiler: Option<String>,

        /// Dotted package namespace the generator emitted stubs under;
        /// derives the source directory together with --generator-root
        #[arg(long)]
        package: Option<String>,

        /// Output root declared by the stub generator
        #[arg(long, requires = "package")]
        generator_root: Option<PathBuf>,
    },

    /// Remove the generated-artifacts subtree under a directory
    Clean {
        /// Directory that scopes the fixed subtree name
        target_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            settings,
            working_dir,
            source_dir,
            lib_dir,
            output_dir,
            compiler,
            package,
            generator_root,
        } => {
            let mut config = BuildConfig::new()?;

            let settings_path = settings.or_else(|| {
                let default = PathBuf::from("wsbuild.toml");
                default.exists().then_some(default)
            });
            if let Some(path) = settings_path {
                Settings::load(&path)?.apply(&mut config)?;
            }

            if let Some(dir) = working_dir {
                config.set_working_dir(dir)?;
            }
            if let Some(dir) = output_dir {
                config.set_output_dir(dir)?;
            }
            if let Some(dir) = lib_dir {
                config.set_lib_dir(dir)?;
            }
            if let Some(dir) = source_dir {
                config.set_source_dir(dir)?;
            } else if let Some(package) = package {
                config.set_source_dir_from_stubs(&GeneratedStubs {
                    output_root: generator_root,
                    package,
                })?;
            }
            if let Some(compiler) = compiler {
                config.set_compiler(compiler);
            }

            let outcome = build(&config)?;
            print!("{}", outcome.process.output_lossy());
            if !outcome.process.success() {
                eprintln!("warning: compiler exited with {}", outcome.process.status);
            }
        }
        Commands::Clean { target_dir } => {
            let outcome = clean_sources(&target_dir)?;
            print!("{}", outcome.output_lossy());
            if !outcome.success() {
                eprintln!("warning: cleanup exited with {}", outcome.status);
            }
        }
    }

    Ok(())
}
