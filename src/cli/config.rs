use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::pattern::pattern_model::SynthesisLimits;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "action-synthesis",
    version,
    about = "Synthesize executable UI test actions from an extracted page context"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: action-synthesis.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append one JSONL trace record per synthesis run to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the ordered action plan for a page context
    Synthesize {
        /// Path to the page context JSON produced by element extraction
        #[arg(long)]
        context: String,

        /// Output format: console, json, yaml
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Override max checkboxes toggled
        #[arg(long)]
        max_checkboxes: Option<usize>,

        /// Override max radio options selected
        #[arg(long)]
        max_radio_options: Option<usize>,

        /// Override max dropdowns exercised
        #[arg(long)]
        max_selects: Option<usize>,
    },

    /// Print testing recommendations for a page context
    Recommend {
        /// Path to the page context JSON produced by element extraction
        #[arg(long)]
        context: String,
    },

    /// List catalog patterns in evaluation order
    Patterns,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `action-synthesis.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub limits: SynthesisLimits,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            path: None,
        }
    }
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("action-synthesis.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content),
        Err(_) => AppConfig::default(),
    }
}

/// Parse config YAML, falling back to defaults when malformed.
pub fn parse_config(content: &str) -> AppConfig {
    match serde_yaml::from_str(content) {
        Ok(config) => clamp_limits(config),
        Err(e) => {
            tracing::warn!(error = %e, "malformed config file; using defaults");
            AppConfig::default()
        }
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

fn clamp_limits(mut config: AppConfig) -> AppConfig {
    let clamped = config.limits.clamped();
    if clamped != config.limits {
        tracing::warn!(
            requested = ?config.limits,
            applied = ?clamped,
            "config limits exceed the sampling caps; clamping"
        );
    }
    config.limits = clamped;
    config
}

/// Resolve sampling limits: CLI flag > config file > defaults. The result
/// never exceeds the sampling caps.
pub fn build_limits(
    config: &SynthesisLimits,
    max_checkboxes: Option<usize>,
    max_radio_options: Option<usize>,
    max_selects: Option<usize>,
) -> SynthesisLimits {
    SynthesisLimits {
        max_checkboxes: max_checkboxes.unwrap_or(config.max_checkboxes),
        max_radio_options: max_radio_options.unwrap_or(config.max_radio_options),
        max_selects: max_selects.unwrap_or(config.max_selects),
    }
    .clamped()
}
