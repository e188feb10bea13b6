//! Secrets-manager client.
//!
//! Thin wrapper over the 1Password CLI: an auth check, per-field existence
//! probes, and one atomic multi-field update. Secret values are passed as
//! arguments and never logged.

use std::path::PathBuf;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::exec::CommandRunner;
use crate::error::{Error, Result, Tool};

/// Secrets-manager CLI bound to one vault and item.
pub struct SecretsManager<'a> {
    runner: &'a dyn CommandRunner,
    program: PathBuf,
    name: String,
    vault: String,
    item: String,
}

impl<'a> SecretsManager<'a> {
    /// Locate the secrets-manager executable named in `settings`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DependencyMissing` if it can't be found.
    pub fn connect(runner: &'a dyn CommandRunner, settings: &Settings) -> Result<Self> {
        let program = runner.resolve(&settings.secrets_manager, Tool::SecretsManager)?;
        debug!(program = %program.display(), "using secrets manager");

        Ok(Self {
            runner,
            program,
            name: settings.secrets_manager.clone(),
            vault: settings.vault.clone(),
            item: settings.item.clone(),
        })
    }

    /// Fail unless the CLI has an authenticated account.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` if `account get` exits non-zero.
    pub fn ensure_signed_in(&self) -> Result<()> {
        let output = self.runner.run(&self.program, &args(&["account", "get"]))?;
        if !output.success() {
            return Err(Error::Auth {
                program: self.name.clone(),
                detail: output.detail(),
            });
        }
        Ok(())
    }

    /// Whether `field` (e.g. "Heat Pump.encryption key") exists on the item.
    ///
    /// Any non-zero exit is treated as "absent".
    pub fn field_exists(&self, field: &str) -> Result<bool> {
        let output = self.runner.run(
            &self.program,
            &args(&[
                "item",
                "get",
                &self.item,
                "--vault",
                &self.vault,
                "--field",
                field,
            ]),
        )?;
        debug!(field, exists = output.success(), "probed secret field");
        Ok(output.success())
    }

    /// Set every `(field, value)` pair as a concealed field in one edit.
    ///
    /// # Errors
    ///
    /// Returns `Error::ExternalTool` if the edit exits non-zero.
    pub fn set_fields(&self, fields: &[(&str, &str)]) -> Result<()> {
        // argv carries the secret values
        let mut argv = Zeroizing::new(args(&["item", "edit", &self.item, "--vault", &self.vault]));
        argv.extend(
            fields
                .iter()
                .map(|(field, value)| format!("{}[password]={}", field, value)),
        );

        let output = self.runner.run(&self.program, &argv)?;
        if !output.success() {
            return Err(Error::ExternalTool {
                program: self.name.clone(),
                action: format!("update item '{}'", self.item),
                detail: output.detail(),
            });
        }

        info!(item = %self.item, fields = fields.len(), "updated secret fields");
        Ok(())
    }

    /// Item the fields are stored on
    pub fn item(&self) -> &str {
        &self.item
    }
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
