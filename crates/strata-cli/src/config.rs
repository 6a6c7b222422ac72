//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--no-color`; handled at the call-site)
//! 2. Environment variables, `STRATA__<SECTION>__<KEY>`
//! 3. File passed with `--config` (must exist)
//! 4. `.strata.toml` in the working directory
//! 5. Global `config.toml` in the platform config directory
//! 6. Built-in defaults
//!
//! [`ProjectLayout`]: strata_core::domain::ProjectLayout

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory the layout is resolved against.
    pub root: PathBuf,
}

/// Where generated code and tests go, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub source_dir: PathBuf,
    pub test_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("lib"),
            test_dir: PathBuf::from("test"),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering every source over the defaults.
    ///
    /// `explicit` is the path the user passed via `--config`; unlike the
    /// global and local files it is required to exist.
    pub fn load(explicit: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_from(Self::config_path(), Path::new(LOCAL_CONFIG_FILE), explicit)
    }

    fn load_from(global: PathBuf, local: &Path, explicit: Option<&PathBuf>) -> CliResult<Self> {
        let defaults = Config::try_from(&AppConfig::default()).map_err(config_error)?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(toml_file(&global).required(false))
            .add_source(toml_file(local).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(config_error)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, as printed by `strata config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "project.root" => self.project.root.display().to_string(),
            "layout.source_dir" => self.layout.source_dir.display().to_string(),
            "layout.test_dir" => self.layout.test_dir.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: [&'static str; 4] = [
        "project.root",
        "layout.source_dir",
        "layout.test_dir",
        "output.no_color",
    ];

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
