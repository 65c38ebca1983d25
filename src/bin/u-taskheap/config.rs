use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::CliArgs;

/// How the task list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Aligned priority/description table.
    #[default]
    Table,
    /// Pretty-printed JSON array of tasks.
    Json,
}

/// Console configuration loaded from TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Load the sample tasks on start-up
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,

    /// Task list rendering
    #[serde(default)]
    pub list_format: ListFormat,
}

fn default_seed_examples() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed_examples: default_seed_examples(),
            list_format: ListFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Return the default config file path: <config dir>/u-taskheap/config.toml
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("u-taskheap").join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path.map(PathBuf::from).or_else(Self::default_config_path) {
            Some(p) => p,
            None => {
                debug!("No config directory available, using defaults");
                return Ok(Self::default());
            }
        };

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command-line flags take precedence over file values.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if args.no_seed {
            self.seed_examples = false;
        }
        if args.json {
            self.list_format = ListFormat::Json;
        }
    }
}
