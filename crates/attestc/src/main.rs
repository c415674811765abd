//! The attest generator CLI.
//!
//! Provides the `attestc` command with the following subcommands:
//!
//! - `attestc generate <dir>` - Generate verification fragments for a project
//! - `attestc check <dir>` - Report diagnostics without writing anything
//! - `attestc explain <dir> <type>` - Print the structured unit for one type
//!
//! Options:
//! - `--json` - Output diagnostics as JSON (one object per line)
//! - `--no-color` - Disable colorized output
//!
//! A project directory must contain an `attest.toml` manifest naming the
//! descriptor files produced by the parsing collaborator. Warnings never
//! fail the run; the exit code is 1 only for hard errors (unreadable
//! input, malformed descriptors, duplicate types).

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use attest_codegen::{generate, Generation};
use attest_common::render::{render_json, render_plain, render_report, RenderOptions};
use attest_descriptor::{load_set, DescriptorSet};
use attest_emit::{render_unit, unit_file_name};

mod manifest;

use manifest::Manifest;

#[derive(Parser)]
#[command(name = "attestc", version, about = "The attest verification generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate verification fragments for a project
    Generate {
        /// Path to the project directory (must contain attest.toml)
        dir: PathBuf,

        /// Output diagnostics as JSON (one object per line)
        #[arg(long)]
        json: bool,

        /// Disable colorized output
        #[arg(long = "no-color")]
        no_color: bool,
    },
    /// Load descriptors and report diagnostics without writing anything
    Check {
        /// Path to the project directory (must contain attest.toml)
        dir: PathBuf,

        /// Output diagnostics as JSON (one object per line)
        #[arg(long)]
        json: bool,

        /// Disable colorized output
        #[arg(long = "no-color")]
        no_color: bool,
    },
    /// Print the structured unit generated for one type, as JSON
    Explain {
        /// Path to the project directory (must contain attest.toml)
        dir: PathBuf,

        /// Qualified name of the type (e.g. Example.Order)
        type_name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            dir,
            json,
            no_color,
        } => {
            let opts = RenderOptions {
                color: !no_color && !json,
                json,
            };
            run_generate(&dir, &opts, true)
        }
        Commands::Check {
            dir,
            json,
            no_color,
        } => {
            let opts = RenderOptions {
                color: !no_color && !json,
                json,
            };
            run_generate(&dir, &opts, false)
        }
        Commands::Explain { dir, type_name } => run_explain(&dir, &type_name),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Execute the pipeline: manifest -> descriptor set -> generate -> report
/// diagnostics -> (optionally) write one fragment per unit.
fn run_generate(dir: &Path, opts: &RenderOptions, write: bool) -> Result<(), String> {
    let project = load_project(dir)?;
    let generation = generate(&project.set);

    report_diagnostics(&generation, project.source.as_deref(), opts);

    if write {
        let out_dir = dir.join(&project.manifest.output.dir);
        std::fs::create_dir_all(&out_dir)
            .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;
        for unit in &generation.units {
            let path = out_dir.join(unit_file_name(unit));
            std::fs::write(&path, render_unit(unit))
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            eprintln!("  Generated: {}", path.display());
        }
    }

    Ok(())
}

/// Print the structured unit for one type as pretty JSON.
fn run_explain(dir: &Path, type_name: &str) -> Result<(), String> {
    let project = load_project(dir)?;
    let generation = generate(&project.set);
    let unit = generation.unit(type_name).ok_or_else(|| {
        format!(
            "no generated unit for type '{}' (not present, or not opted in)",
            type_name
        )
    })?;
    let json = serde_json::to_string_pretty(unit)
        .map_err(|e| format!("Failed to serialize unit: {}", e))?;
    println!("{}", json);
    Ok(())
}

struct Project {
    manifest: Manifest,
    set: DescriptorSet,
    /// Source text the descriptors were derived from, when the manifest
    /// names it; enables labeled diagnostics.
    source: Option<String>,
}

/// Validate the project directory and load manifest + descriptors.
fn load_project(dir: &Path) -> Result<Project, String> {
    if !dir.exists() {
        return Err(format!(
            "Project directory '{}' does not exist",
            dir.display()
        ));
    }
    if !dir.is_dir() {
        return Err(format!("'{}' is not a directory", dir.display()));
    }

    let manifest_path = dir.join("attest.toml");
    if !manifest_path.exists() {
        return Err(format!(
            "No 'attest.toml' found in '{}'. attest projects must have a manifest.",
            dir.display()
        ));
    }
    let manifest = Manifest::from_file(&manifest_path)?;

    let paths: Vec<PathBuf> = manifest
        .input
        .descriptors
        .iter()
        .map(|p| dir.join(p))
        .collect();
    let set = load_set(&paths).map_err(|e| e.to_string())?;

    let source = match &manifest.input.source {
        Some(rel) => {
            let path = dir.join(rel);
            Some(
                std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
            )
        }
        None => None,
    };

    Ok(Project {
        manifest,
        set,
        source,
    })
}

/// Report generation diagnostics to stderr, one per line (or one labeled
/// report each, when source text is available).
fn report_diagnostics(generation: &Generation, source: Option<&str>, opts: &RenderOptions) {
    for diag in &generation.diagnostics {
        if opts.json {
            eprintln!("{}", render_json(diag));
        } else if let Some(source) = source {
            eprintln!("{}", render_report(diag, source, opts.color));
        } else {
            eprintln!("{}", render_plain(diag));
        }
    }
}
