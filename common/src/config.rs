use serde::Deserialize;
use std::path::Path;

use crate::yaml_include::load_yaml_with_includes;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Scan {
        path: String,
        #[source]
        source: yaml_rust2::ScanError,
    },

    #[error("no YAML document found in {path}")]
    Empty { path: String },

    #[error("failed to emit merged YAML: {0}")]
    Emit(#[from] yaml_rust2::EmitError),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yml::Error),
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CategorizerConfig {
    /// JSON library file holding games, review statistics and filters.
    pub library_path: String,
    /// XML profile holding one or more `AutoCatUserScore` definitions.
    pub profile_path: String,
    /// Where the categorized library is written; nothing is written when unset.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Autocat names to run, in order. Empty runs every autocat in the profile.
    #[serde(default)]
    pub autocats: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub categorizer: CategorizerConfig,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let yaml = load_yaml_with_includes(config_path)?;

        let mut merged = String::new();
        {
            let mut emitter = yaml_rust2::YamlEmitter::new(&mut merged);
            emitter.dump(&yaml)?;
        }

        Self::from_yaml_str(&merged)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(contents)?)
    }
}
