//! Shared configuration loader for the TFS toolchain.
//!
//! `defaults/tfs.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`TfsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tfs_analysis::{CompensationMode, HighlightOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/tfs.default.toml");

/// Top-level configuration consumed by TFS applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TfsConfig {
    pub highlight: HighlightSettings,
}

/// Mirrors the knobs exposed by the highlighting pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HighlightSettings {
    pub enable_color_highlight: bool,
    pub compensation: CompensationSetting,
    pub min_luminance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompensationSetting {
    Auto,
    Off,
}

impl HighlightSettings {
    /// Convert into the options struct the pipeline consumes.
    pub fn to_options(&self) -> HighlightOptions {
        HighlightOptions {
            enable_color_highlight: self.enable_color_highlight,
            compensation: match self.compensation {
                CompensationSetting::Auto => CompensationMode::Auto,
                CompensationSetting::Off => CompensationMode::Off,
            },
            min_luminance: self.min_luminance,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TfsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TfsConfig, ConfigError> {
    Loader::new().build()
}
