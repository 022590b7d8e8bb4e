//! Configuration loading
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. `defaults/rendercheck.default.toml`, compiled into the crate
//! 2. a `rendercheck.toml` next to the suite file, if there is one, and any
//!    file passed explicitly
//! 3. single-key overrides such as `--format json` on the command line
//!
//! The merged result is deserialized into [`RenderCheckConfig`] and checked
//! before it is handed out.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::suite::RunOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/rendercheck.default.toml");

/// Name of the project-local file picked up by [`Loader::for_suite`]
pub const LOCAL_CONFIG_FILE: &str = "rendercheck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderCheckConfig {
    pub report: ReportConfig,
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub show_tree_on_failure: bool,
}

/// How `rendercheck run` prints its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreevizConfig {
    pub max_label_chars: usize,
}

impl RenderCheckConfig {
    /// Suite runner settings derived from this configuration
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            show_tree_on_failure: self.report.show_tree_on_failure,
            max_label_chars: self.treeviz.max_label_chars,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.treeviz.max_label_chars == 0 {
            return Err(ConfigError::Message(
                "treeviz.max_label_chars must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Builds a [`RenderCheckConfig`] from the default layer plus user layers
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            layers: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Defaults plus the `rendercheck.toml` sitting beside `suite_path`, when present
    pub fn for_suite(suite_path: impl AsRef<Path>) -> Self {
        let dir = suite_path
            .as_ref()
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new().with_optional_file(dir.join(LOCAL_CONFIG_FILE))
    }

    /// Add a TOML file that has to exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        self.layers = self.layers.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
        self
    }

    /// Pin one dotted key, e.g. `report.format`, above every file layer
    pub fn set_override<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RenderCheckConfig, ConfigError> {
        let merged = self.layers.build()?;
        merged.try_deserialize::<RenderCheckConfig>()?.validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<RenderCheckConfig, ConfigError> {
    Loader::new().build()
}
