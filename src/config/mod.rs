//! Configuration for the gallery client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/petgal/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed batch size: every provider request asks for (at most) six images
pub const DEFAULT_BATCH_SIZE: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Unsplash access key, required for sea photo search
    pub unsplash_access_key: Option<String>,

    /// Images per fetch (capped at 6, the page size all three providers get)
    pub batch_size: usize,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Theme name: "Dark", "Light", "Ocean"
    pub theme: String,

    /// Demo mode: serve canned batches instead of calling the providers
    pub demo_mode: bool,

    /// Whether to run the TUI (disabled = one headless fetch to stdout)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unsplash_access_key: None,
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: 30,
            theme: "Dark".to_string(),
            demo_mode: false,
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable JSON file logging (in addition to the TUI buffer or stdout)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Prefix for log file names (e.g. "petgal" -> "petgal.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_prefix: "petgal".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub unsplash_access_key: Option<String>,
    pub batch_size: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Logging settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/petgal/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("petgal").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, delete the file or run `petgal config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_parts(file)
    }

    /// Assemble the effective config from a parsed file plus the process
    /// environment (split out so tests can feed a FileConfig directly)
    pub(crate) fn from_parts(file: FileConfig) -> Self {
        let defaults = Self::default();

        // Unsplash key: env > file > unset. Two env names accepted: the
        // project-prefixed one and the name Unsplash's own docs use.
        let unsplash_access_key = std::env::var("PETGAL_UNSPLASH_KEY")
            .ok()
            .or_else(|| std::env::var("UNSPLASH_ACCESS_KEY").ok())
            .or(file.unsplash_access_key)
            .filter(|k| !k.is_empty());

        // Batch size: file > default, capped at the fixed page size
        let batch_size = file
            .batch_size
            .unwrap_or(DEFAULT_BATCH_SIZE)
            .clamp(1, DEFAULT_BATCH_SIZE);

        // Timeout: env > file > default
        let timeout_secs = std::env::var("PETGAL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(defaults.timeout_secs);

        // Theme: env > file > default
        let theme = std::env::var("PETGAL_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("PETGAL_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("PETGAL_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            unsplash_access_key,
            batch_size,
            timeout_secs,
            theme,
            demo_mode,
            enable_tui,
            logging,
        }
    }

    /// Render this config as a commented TOML template.
    /// Single source of truth for `ensure_config_exists` and `--reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# petgal configuration
# Values here are overridden by environment variables:
#   PETGAL_UNSPLASH_KEY (or UNSPLASH_ACCESS_KEY)
#   PETGAL_THEME, PETGAL_TIMEOUT_SECS, PETGAL_DEMO, PETGAL_NO_TUI

# Unsplash access key, required for sea photo search
# unsplash_access_key = "your-key-here"

# Images per fetch (1-6)
batch_size = {batch_size}

# HTTP request timeout in seconds
timeout_secs = {timeout_secs}

# Theme: "Dark", "Light", "Ocean"
theme = {theme:?}

[logging]
# Log level: trace, debug, info, warn, error
level = {level:?}
# Write JSON logs to daily-rotated files as well
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_prefix = {file_prefix:?}
"#,
            batch_size = self.batch_size,
            timeout_secs = self.timeout_secs,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
