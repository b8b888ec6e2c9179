//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ploot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::MarkerKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlootConfig {
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlotConfig {
    pub title: Option<String>,
    pub width: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub marker: Option<MarkerKind>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub width: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub marker: Option<MarkerKind>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "ploot";
pub const DEFAULT_COLOR: &str = "cyan";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_LOG_FILE_NAME: &str = "ploot.log";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    /// Window size in samples; None follows the terminal width.
    pub fixed_width: Option<usize>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub marker: MarkerKind,
    pub color: String,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    /// Settings that were ignored while resolving, for logging at startup.
    pub diagnostics: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the `~/.ploot` directory.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ploot"))
}

/// Returns the path to `~/.ploot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from.
///
/// Config is loaded before the file logger exists, so instead of logging,
/// loading reports its outcome and `main` logs it once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// No file existed; a commented-out default was written.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    GenerateFailed { path: PathBuf, reason: String },
    /// No home directory, so no config file at all.
    NoHome,
}

impl ConfigSource {
    /// Whether the user should hear about this at warn level.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ConfigSource::GenerateFailed { .. } | ConfigSource::NoHome)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => write!(
                f,
                "No config file found, failed to write default at {}: {}",
                path.display(),
                reason
            ),
            ConfigSource::NoHome => {
                write!(f, "Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.ploot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PlootConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(PlootConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_or_generate(&path),
        None => Ok((PlootConfig::default(), ConfigSource::NoHome)),
    }
}

/// Load `path`, writing the commented-out default there first if it is missing.
pub fn load_or_generate(path: &Path) -> Result<(PlootConfig, ConfigSource), ConfigError> {
    if path.exists() {
        let config = load_config_from(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let source = match generate_default_config(path) {
        Ok(()) => ConfigSource::Generated(path.to_path_buf()),
        Err(e) => ConfigSource::GenerateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    };
    Ok((PlootConfig::default(), source))
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<PlootConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r##"# Ploot Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [plot]
# title = "ploot"                    # Or set PLOOT_TITLE env var
# width = 120                        # Samples in the window (default: terminal width)
# min = -1.0                         # Lower y bound (default: smallest sample in window)
# max = 1.0                          # Upper y bound (default: largest sample in window)
# marker = "braille"                 # "braille", "dot", "block", "half-block"
# color = "cyan"                     # Color name or "#rrggbb"

# [log]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "/tmp/ploot.log"            # Default: ~/.ploot/ploot.log
"##;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PlootConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut diagnostics = Vec::new();

    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| std::env::var("PLOOT_TITLE").ok())
        .or_else(|| config.plot.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Width: CLI → env → config; zero means "follow the terminal"
    let fixed_width = cli
        .width
        .or_else(|| env_parse::<usize>("PLOOT_WIDTH", &mut diagnostics))
        .or(config.plot.width)
        .filter(|&w| w > 0);

    let (y_min, y_max) = resolve_bounds(
        cli.min.or(config.plot.min),
        cli.max.or(config.plot.max),
        &mut diagnostics,
    );

    // Log level: env → config → default
    let log_level = std::env::var("PLOOT_LOG_LEVEL")
        .ok()
        .or_else(|| config.log.level.clone())
        .and_then(|level| match LevelFilter::from_str(&level) {
            Ok(filter) => Some(filter),
            Err(_) => {
                diagnostics.push(format!(
                    "Unknown log level '{}', using {}",
                    level, DEFAULT_LOG_LEVEL
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → ~/.ploot/ploot.log
    let log_file = std::env::var("PLOOT_LOG_FILE")
        .ok()
        .or_else(|| config.log.file.clone())
        .map(PathBuf::from)
        .or_else(|| config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)));

    ResolvedConfig {
        title,
        fixed_width,
        y_min,
        y_max,
        marker: cli.marker.or(config.plot.marker).unwrap_or_default(),
        color: config
            .plot
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        log_level,
        log_file,
        diagnostics,
    }
}

/// Drops both bounds when they can't form a valid axis.
fn resolve_bounds(
    min: Option<f64>,
    max: Option<f64>,
    diagnostics: &mut Vec<String>,
) -> (Option<f64>, Option<f64>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo >= hi => {
            diagnostics.push(format!(
                "Ignoring y bounds: min {} is not below max {}",
                lo, hi
            ));
            (None, None)
        }
        bounds => bounds,
    }
}

fn env_parse<T: FromStr>(key: &str, diagnostics: &mut Vec<String>) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            diagnostics.push(format!("Ignoring {}: '{}' is not a valid value", key, raw));
            None
        }
    }
}
