//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot generator configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Simulated loading delay before the snapshot is generated
    #[serde(default = "default_load_delay")]
    pub load_delay_ms: u64,

    #[serde(default = "default_chart_days")]
    pub chart_days: usize,

    #[serde(default = "default_heatmap_weeks")]
    pub heatmap_weeks: usize,

    /// Rows on the leaderboard, including the current user
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Fixed RNG seed; unset means fresh randomness on every load
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_load_delay() -> u64 {
    1000 // 1 second
}

fn default_chart_days() -> usize {
    30
}

fn default_heatmap_weeks() -> usize {
    12
}

fn default_leaderboard_size() -> usize {
    8
}

pub const MIN_CHART_DAYS: usize = 2;
pub const MAX_CHART_DAYS: usize = 366;
pub const MIN_HEATMAP_WEEKS: usize = 1;
pub const MAX_HEATMAP_WEEKS: usize = 53;
pub const MIN_LEADERBOARD_SIZE: usize = 2;

fn max_leaderboard_size() -> usize {
    crate::dashboard::samples::RIVALS.len() + 1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay(),
            chart_days: default_chart_days(),
            heatmap_weeks: default_heatmap_weeks(),
            leaderboard_size: default_leaderboard_size(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Copy with every size clamped into the range the generator supports
    pub fn normalized(&self) -> Self {
        Self {
            chart_days: self.chart_days.clamp(MIN_CHART_DAYS, MAX_CHART_DAYS),
            heatmap_weeks: self.heatmap_weeks.clamp(MIN_HEATMAP_WEEKS, MAX_HEATMAP_WEEKS),
            leaderboard_size: self
                .leaderboard_size
                .clamp(MIN_LEADERBOARD_SIZE, max_leaderboard_size()),
            ..self.clone()
        }
    }

    /// Reject sizes the generator would have to clamp
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("chart_days", self.chart_days, MIN_CHART_DAYS, MAX_CHART_DAYS)?;
        check_range(
            "heatmap_weeks",
            self.heatmap_weeks,
            MIN_HEATMAP_WEEKS,
            MAX_HEATMAP_WEEKS,
        )?;
        check_range(
            "leaderboard_size",
            self.leaderboard_size,
            MIN_LEADERBOARD_SIZE,
            max_leaderboard_size(),
        )
    }

    pub fn load_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.load_delay_ms)
    }
}

fn check_range(field: &str, value: usize, min: usize, max: usize) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "generator.{} must be between {} and {}, got {}",
            field, min, max, value
        )))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.generator.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only.
    ///
    /// Nothing is validated here; out-of-range sizes are clamped when a
    /// snapshot is generated.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides, validating
    /// the merged result
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_lookup(path, |key| std::env::var(key).ok())
    }

    fn load_with_lookup(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::read(path)?;
        config.apply_overrides(lookup);
        config.generator.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("levelup").join("config.toml")),
            Some(PathBuf::from("./levelup.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Generator overrides
        if let Some(delay) = lookup("LEVELUP_LOAD_DELAY_MS").and_then(|s| s.parse().ok()) {
            self.generator.load_delay_ms = delay;
        }
        if let Some(seed) = lookup("LEVELUP_SEED").and_then(|s| s.parse().ok()) {
            self.generator.seed = Some(seed);
        }
        if let Some(size) = lookup("LEVELUP_LEADERBOARD_SIZE").and_then(|s| s.parse().ok()) {
            self.generator.leaderboard_size = size;
        }

        // Logging overrides
        if let Some(level) = lookup("LEVELUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LEVELUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# LevelUp Life Configuration
#
# Environment variables override these settings:
# - LEVELUP_LOAD_DELAY_MS
# - LEVELUP_SEED
# - LEVELUP_LEADERBOARD_SIZE
# - LEVELUP_LOG_LEVEL
# - LEVELUP_LOG_FORMAT

[generator]
# Simulated loading delay before the dashboard appears (ms)
load_delay_ms = 1000

# Days shown on the growth chart
chart_days = 30

# Weeks shown on the activity heatmap
heatmap_weeks = 12

# Leaderboard rows, including you
leaderboard_size = 8

# Fix the random seed for a reproducible snapshot
# seed = 42

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.load_delay_ms, 1000);
        assert_eq!(config.generator.chart_days, 30);
        assert_eq!(config.generator.heatmap_weeks, 12);
        assert_eq!(config.generator.leaderboard_size, 8);
        assert!(config.generator.seed.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_default_config_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nseed = 9\nheatmap_weeks = 4").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.generator.heatmap_weeks, 4);
        assert_eq!(config.generator.chart_days, 30);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_sizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nleaderboard_size = 1").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator\nseed = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/levelup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LEVELUP_LOAD_DELAY_MS", "0"),
            ("LEVELUP_SEED", "123"),
            ("LEVELUP_LEADERBOARD_SIZE", "not-a-number"),
            ("LEVELUP_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.generator.load_delay_ms, 0);
        assert_eq!(config.generator.seed, Some(123));
        // Unparseable values are ignored
        assert_eq!(config.generator.leaderboard_size, 8);
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_normalized_clamps() {
        let config = GeneratorConfig {
            chart_days: 0,
            heatmap_weeks: 0,
            leaderboard_size: 1000,
            ..GeneratorConfig::default()
        };
        let normalized = config.normalized();
        assert_eq!(normalized.chart_days, 2);
        assert_eq!(normalized.heatmap_weeks, 1);
        assert_eq!(
            normalized.leaderboard_size,
            crate::dashboard::samples::RIVALS.len() + 1
        );
        assert!(normalized.validate().is_ok());
    }

    #[test]
    fn test_oversized_ranges_are_clamped_and_rejected() {
        let config = GeneratorConfig {
            chart_days: 45_000_000,
            heatmap_weeks: 14_000_000,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let normalized = config.normalized();
        assert_eq!(normalized.chart_days, MAX_CHART_DAYS);
        assert_eq!(normalized.heatmap_weeks, MAX_HEATMAP_WEEKS);
        assert!(normalized.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_oversized_heatmap() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nheatmap_weeks = 14000000").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_env_overrides_are_validated_after_merge() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nleaderboard_size = 1").unwrap();

        // An override can repair an invalid file value
        let fixed = Config::load_with_lookup(file.path(), |key| {
            (key == "LEVELUP_LEADERBOARD_SIZE").then(|| "5".to_string())
        })
        .unwrap();
        assert_eq!(fixed.generator.leaderboard_size, 5);

        // And an invalid override is rejected just like a file value
        let mut valid = tempfile::NamedTempFile::new().unwrap();
        writeln!(valid, "[generator]\nseed = 1").unwrap();
        let err = Config::load_with_lookup(valid.path(), |key| {
            (key == "LEVELUP_LEADERBOARD_SIZE").then(|| "1".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
