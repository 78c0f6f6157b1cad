//! Configuration assembly with layered precedence.
//!
//! The builder merges configuration from defaults, the user config file,
//! environment variables, and programmatic overrides.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a merged configuration from all sources.
///
/// Precedence, highest to lowest:
/// 1. Programmatic overrides (via [`with_config`](Self::with_config))
/// 2. Environment variables (`KURA_*`)
/// 3. User config (`~/.kura/config.yaml`)
/// 4. Built-in defaults
///
/// # Examples
///
/// ```no_run
/// use kura::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("max duration: {}", config.effective_max_duration_days());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides where the user config file is loaded from.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Skips loading the user config file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies a programmatic configuration with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assembles the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user config file exists but cannot be
    /// parsed, or if an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                config.merge_from(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(overrides);
        }

        Ok(config)
    }
}
