//! Secret generation via the external RNG tool.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::Secrets;
use crate::core::exec::CommandRunner;
use crate::error::{Error, Result, Tool};

/// Generate a fresh encryption key (base64) and OTA password (hex).
///
/// # Errors
///
/// Returns `Error::DependencyMissing` if the RNG tool can't be found, or
/// `Error::ExternalTool` if an invocation fails or prints nothing.
pub fn generate(runner: &dyn CommandRunner, settings: &Settings) -> Result<Secrets> {
    let encryption_key = random(runner, settings, "-base64", constants::ENCRYPTION_KEY_BYTES)?;
    let ota_password = random(runner, settings, "-hex", constants::OTA_PASSWORD_BYTES)?;
    debug!("generated secrets");

    Ok(Secrets::new(encryption_key, ota_password))
}

fn random(
    runner: &dyn CommandRunner,
    settings: &Settings,
    encoding: &str,
    bytes: usize,
) -> Result<String> {
    let program = runner.resolve(&settings.rng_tool, Tool::Rng)?;
    let args = vec!["rand".to_string(), encoding.to_string(), bytes.to_string()];
    let output = runner.run(&program, &args)?;

    let failure = |detail: String| Error::ExternalTool {
        program: settings.rng_tool.clone(),
        action: format!("generate {} random bytes", bytes),
        detail,
    };

    if !output.success() {
        return Err(failure(output.detail()));
    }

    let stdout = Zeroizing::new(output.stdout);
    let value = stdout.trim().to_string();
    if value.is_empty() {
        return Err(failure("no output".to_string()));
    }

    Ok(value)
}
