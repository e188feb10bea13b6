//! Conflict checks run before anything is written.
//!
//! Local checks never touch an external process; the remote check needs a
//! signed-in secrets manager. Nothing here is atomic with respect to other
//! processes changing the same files or item.

use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::core::domain::DeviceLayout;
use crate::core::secrets::SecretsManager;
use crate::error::{ConflictError, Result};

/// Check the template file, device file and package directory.
///
/// # Errors
///
/// Returns `ConflictError` for the first pre-existing entry found.
pub fn check_local(layout: &DeviceLayout, template_file: &Path) -> Result<()> {
    check_template(template_file, &layout.encryption_key_name)?;
    check_template(template_file, &layout.ota_password_name)?;

    // symlink_metadata so a dangling link still counts as taken
    if layout.device_file.symlink_metadata().is_ok() {
        return Err(ConflictError::ConfigFile(layout.device_file.clone()).into());
    }

    if let Some(package) = &layout.package {
        if package.dir.symlink_metadata().is_ok() {
            return Err(ConflictError::PackageDir(package.dir.clone()).into());
        }
    }

    debug!(device_file = %layout.device_file.display(), "no local conflicts");
    Ok(())
}

/// Check that neither secret field exists on the secrets-manager item.
///
/// # Errors
///
/// Returns `Error::Auth` if the secrets manager isn't signed in, or
/// `ConflictError::SecretField` if a field already exists.
pub fn check_remote(layout: &DeviceLayout, op: &SecretsManager<'_>) -> Result<()> {
    op.ensure_signed_in()?;

    for field in [&layout.encryption_key_field, &layout.ota_password_field] {
        if op.field_exists(field)? {
            return Err(ConflictError::SecretField {
                item: op.item().to_string(),
                field: field.clone(),
            }
            .into());
        }
    }

    Ok(())
}

fn check_template(template_file: &Path, key: &str) -> Result<()> {
    if !template_file.exists() {
        return Ok(());
    }

    let contents = std::fs::read_to_string(template_file)?;
    if defines_key(&contents, key)? {
        return Err(ConflictError::TemplateKey {
            key: key.to_string(),
            path: template_file.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Whether some line of `contents` starts with `key:`.
pub fn defines_key(contents: &str, key: &str) -> Result<bool> {
    let re = Regex::new(&format!("(?m)^{}:", regex::escape(key)))?;
    Ok(re.is_match(contents))
}
