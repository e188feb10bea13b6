//! Repository settings.
//!
//! Handles reading the optional `.homecfg.toml` at the repository root and
//! resolving every root-relative path once, so the workflow receives a single
//! explicit [`Settings`] value.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of `.homecfg.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Secrets template file, relative to the root
    pub template: Option<PathBuf>,
    /// Device configuration directory, relative to the root
    pub config_dir: Option<PathBuf>,
    /// Secrets-manager vault
    pub vault: Option<String>,
    /// Secrets-manager item
    pub item: Option<String>,
    /// Secrets-manager executable
    pub op: Option<String>,
    /// Random byte generator executable
    pub rng: Option<String>,
}

impl FileConfig {
    /// Load `.homecfg.toml` from `root`, or defaults when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` if the file exists
    /// but can't be read or contains unknown keys.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(constants::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(config)
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository root
    pub root: PathBuf,
    /// Absolute path of the secrets template file
    pub template_file: PathBuf,
    /// Absolute path of the device configuration directory
    pub config_dir: PathBuf,
    /// Secrets-manager vault
    pub vault: String,
    /// Secrets-manager item
    pub item: String,
    /// Secrets-manager executable (name or path)
    pub secrets_manager: String,
    /// Random byte generator executable (name or path)
    pub rng_tool: String,
}

impl Settings {
    /// Settings with every default, rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::resolve(root.into(), FileConfig::default(), None)
    }

    /// Load settings for `root`, applying the config file and then the
    /// secrets-manager override from the command line.
    pub fn load(root: impl Into<PathBuf>, op_override: Option<String>) -> Result<Self> {
        let root = root.into();
        let file = FileConfig::load(&root)?;
        Ok(Self::resolve(root, file, op_override))
    }

    fn resolve(root: PathBuf, file: FileConfig, op_override: Option<String>) -> Self {
        let template_file = root.join(
            file.template
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_TEMPLATE_FILE)),
        );
        let config_dir = root.join(
            file.config_dir
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_DIR)),
        );

        Self {
            template_file,
            config_dir,
            vault: file
                .vault
                .unwrap_or_else(|| constants::DEFAULT_VAULT.to_string()),
            item: file
                .item
                .unwrap_or_else(|| constants::DEFAULT_ITEM.to_string()),
            secrets_manager: op_override
                .or(file.op)
                .unwrap_or_else(|| constants::DEFAULT_SECRETS_MANAGER.to_string()),
            rng_tool: file
                .rng
                .unwrap_or_else(|| constants::DEFAULT_RNG_TOOL.to_string()),
            root,
        }
    }
}
