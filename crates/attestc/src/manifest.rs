//! The `attest.toml` project manifest.
//!
//! Names the descriptor files the parsing collaborator produced, the
//! original source text they were derived from (optional, enables labeled
//! diagnostics), and where generated fragments go.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A parsed attest.toml manifest.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub package: Package,
    pub input: Input,
    #[serde(default)]
    pub output: Output,
}

/// Package metadata from the `[package]` section.
#[derive(Debug, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input files from the `[input]` section, relative to the project dir.
#[derive(Debug, Deserialize)]
pub struct Input {
    /// Descriptor JSON files, merged into one set.
    pub descriptors: Vec<PathBuf>,
    /// Source text the descriptors were derived from; enables labeled
    /// diagnostic reports.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

/// Output configuration from the `[output]` section.
#[derive(Debug, Deserialize)]
pub struct Output {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Manifest {
    /// Read and parse an attest.toml manifest from a file path.
    pub fn from_file(path: &Path) -> Result<Manifest, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_str(&content)
    }

    /// Parse an attest.toml manifest from a string.
    pub fn from_str(content: &str) -> Result<Manifest, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse manifest: {}", e))
    }
}
