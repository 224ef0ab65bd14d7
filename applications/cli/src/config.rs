/// tagsort configuration
use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tagsort.toml";

/// Environment variable prefix (`TAGSORT_DRY_RUN`, `TAGSORT_LOG_FILTER`)
pub const ENV_PREFIX: &str = "TAGSORT";

/// Settings layered from `tagsort.toml` and `TAGSORT_*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagsortConfig {
    /// Print the plan instead of moving files
    #[serde(default)]
    pub dry_run: bool,

    /// Tracing filter directive used when `RUST_LOG` is unset
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl TagsortConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `tagsort.toml` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with TAGSORT_)
        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
