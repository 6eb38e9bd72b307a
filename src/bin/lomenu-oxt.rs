//! Command line front-end for building and inspecting the lomenu extension.
//!
//! # Usage
//!
//! Build from the project in the current directory:
//! ```sh
//! lomenu-oxt
//! ```
//!
//! Build another project with a custom button table:
//! ```sh
//! lomenu-oxt build --project-dir ../fork --config fork.yaml
//! ```
//!
//! List the contents of a package:
//! ```sh
//! lomenu-oxt inspect builds/lomenu_0.0.1.18093012.oxt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lomenu::config::ExtensionConfig;
use lomenu::oxt::{BuildPaths, OxtPackage, Packager};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the lomenu LibreOffice extension
#[derive(Parser, Debug)]
#[command(
    name = "lomenu-oxt",
    about = "Build and inspect the lomenu LibreOffice extension package",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble the .oxt package (default)
    Build {
        /// Project directory holding `extension/`; `builds/` is created there
        #[arg(long, value_name = "DIR")]
        project_dir: Option<PathBuf>,

        /// YAML button table to use instead of the built-in one
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// List the entries and manifest of a package
    Inspect {
        #[arg(value_name = "OXT")]
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn build(project_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let paths = match project_dir {
        Some(dir) => BuildPaths::for_project(dir),
        None => BuildPaths::discover().context("Failed to locate project directory")?,
    };
    let config = match config {
        Some(path) => ExtensionConfig::from_yaml_file(&path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ExtensionConfig::lomenu(),
    };

    let oxt = Packager::new(config, paths)
        .build()
        .context("Failed to build extension")?;
    println!("{}", oxt.display());
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let package =
        OxtPackage::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    println!("Entries ({}):", package.len());
    for name in package.file_names() {
        println!("  {}", name);
    }

    let manifest = package
        .manifest()
        .with_context(|| format!("Failed to read manifest of {}", path.display()))?;
    println!("Manifest:");
    for entry in &manifest.entries {
        let marker = if package.has_file(&entry.full_path) { "" } else { " (missing)" };
        println!("  {} [{}]{}", entry.full_path, entry.media_type, marker);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command.unwrap_or(Command::Build {
        project_dir: None,
        config: None,
    }) {
        Command::Build {
            project_dir,
            config,
        } => build(project_dir, config),
        Command::Inspect { path } => inspect(&path),
    }
}
