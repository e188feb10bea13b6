//! Error types.
//!
//! Every failure of the create-device workflow maps to one variant of
//! [`Error`]. All of them except [`Error::Io`] and
//! [`Error::ExternalTool`] are raised before anything is mutated.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("required executable not found: {program}")]
    DependencyMissing { program: String, tool: Tool },

    #[error("{program} is not signed in: {detail}")]
    Auth { program: String, detail: String },

    #[error("{program} failed to {action}: {detail}")]
    ExternalTool {
        program: String,
        action: String,
        detail: String,
    },

    #[error("aborted: nothing was changed")]
    Aborted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// External executable roles, each configured by its own setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Secrets-manager CLI (`--op`, `HOMECFG_OP`, `op =`)
    SecretsManager,
    /// Random byte generator (`rng =`)
    Rng,
}

/// Invalid user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid slug '{slug}' derived from '{name}'")]
    InvalidSlug { name: String, slug: String },
}

/// Something already exists for the derived identifiers.
#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("{key} is already defined in {}", .path.display())]
    TemplateKey { key: String, path: PathBuf },

    #[error("config file already exists: {}", .0.display())]
    ConfigFile(PathBuf),

    #[error("package directory already exists: {}", .0.display())]
    PackageDir(PathBuf),

    #[error("secret field '{field}' already exists on item '{item}'")]
    SecretField { item: String, field: String },
}

/// Problems with `.homecfg.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short follow-up suggestion shown under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::DependencyMissing {
                program,
                tool: Tool::SecretsManager,
            } => Some(format!(
                "install {} or point --op / `op =` in .homecfg.toml at it",
                program
            )),
            Error::DependencyMissing {
                program,
                tool: Tool::Rng,
            } => Some(format!(
                "install {} or point `rng =` in .homecfg.toml at it",
                program
            )),
            Error::Auth { program, .. } => Some(format!("run: eval $({} signin)", program)),
            Error::Conflict(_) => Some("choose another name or remove the existing entry".into()),
            _ => None,
        }
    }
}
