//! # Pagesmith CLI
//!
//! Headless host for the Pagesmith engine.
//!
//! ## Usage
//!
//! ```bash
//! pagesmith kinds
//! pagesmith presets --json
//! pagesmith render --preset "Grid Layout" --background "#fef3c7"
//! pagesmith --out-dir site run page.json
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Resolved options: config file, overrides, output target
//! - `App` - Runs one subcommand against a fresh `Editor`
//!
//! Generated markup and stylesheet go to stdout unless `--out-dir` is
//! given; logs always go to stderr.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod app;

pub use app::{App, Output};

use std::path::PathBuf;

use anyhow::Context;
use builder_core::{EditorConfig, Viewport};
use clap::{Parser, Subcommand};

/// File name for generated markup in `--out-dir`.
pub const MARKUP_FILE: &str = "index.html";

/// File name for the generated stylesheet in `--out-dir`.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Command-line arguments for pagesmith.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagesmith")]
#[command(about = "Build pages from typed blocks and export HTML and CSS")]
#[command(version)]
pub struct CliArgs {
    /// JSON editor configuration file
    #[arg(long, global = true, env = "PAGESMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Canvas background color (e.g. "#fef3c7")
    #[arg(long, global = true)]
    pub background: Option<String>,

    /// Canvas height in pixels
    #[arg(long, global = true)]
    pub height: Option<f32>,

    /// Preview viewport: mobile, tablet or desktop
    #[arg(long, global = true)]
    pub viewport: Option<Viewport>,

    /// Write index.html and styles.css here instead of stdout
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CliCommand {
    /// List the element kinds in the palette
    Kinds,
    /// List the presets
    Presets,
    /// Render a preset to markup and stylesheet
    Render {
        /// Preset name (case-insensitive)
        #[arg(long)]
        preset: String,
    },
    /// Replay a JSON array of editor commands, then render
    Run {
        /// Path to the command script
        script: PathBuf,
    },
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Editor configuration file, if any.
    pub config_path: Option<PathBuf>,
    /// Background override.
    pub background: Option<String>,
    /// Height override.
    pub height: Option<f32>,
    /// Viewport override.
    pub viewport: Option<Viewport>,
    /// Output directory for generated files.
    pub out_dir: Option<PathBuf>,
    /// JSON listings.
    pub json: bool,
    /// Subcommand.
    pub command: CliCommand,
}

impl CliConfig {
    /// Create a configuration running `command` with no overrides.
    #[must_use]
    pub fn new(command: CliCommand) -> Self {
        Self {
            config_path: None,
            background: None,
            height: None,
            viewport: None,
            out_dir: None,
            json: false,
            command,
        }
    }

    /// Load the editor configuration and apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// the result is invalid.
    pub fn editor_config(&self) -> anyhow::Result<EditorConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                EditorConfig::from_json(&json)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => EditorConfig::default(),
        };

        if let Some(background) = &self.background {
            config.canvas_background.clone_from(background);
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if let Some(viewport) = self.viewport {
            config.viewport = viewport;
        }
        config.validate().context("Invalid command-line override")?;
        Ok(config)
    }
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            config_path: args.config,
            background: args.background,
            height: args.height,
            viewport: args.viewport,
            out_dir: args.out_dir,
            json: args.json,
            command: args.command,
        }
    }
}
