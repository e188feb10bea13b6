//! Constants used throughout homecfg.
//!
//! Centralizes file names, default tool names and secret field labels.

/// Optional configuration file at the repository root.
pub const CONFIG_FILE: &str = ".homecfg.toml";

/// Default secrets template file, relative to the repository root.
pub const DEFAULT_TEMPLATE_FILE: &str = "secrets.yaml.tpl";

/// Default device configuration directory, relative to the repository root.
pub const DEFAULT_CONFIG_DIR: &str = "esphome";

/// Default secrets-manager vault.
pub const DEFAULT_VAULT: &str = "Home";

/// Default secrets-manager item holding one section per device or type.
pub const DEFAULT_ITEM: &str = "ESPHome";

/// Default secrets-manager executable (1Password CLI).
pub const DEFAULT_SECRETS_MANAGER: &str = "op";

/// Default random byte generator.
pub const DEFAULT_RNG_TOOL: &str = "openssl";

/// Directory holding shared per-type packages, inside the config directory.
pub const PACKAGES_DIR: &str = "packages";

/// File name of a type's shared package.
pub const BASE_PACKAGE_FILE: &str = "base.yaml";

/// Secrets-manager field label for the API encryption key.
pub const ENCRYPTION_KEY_FIELD: &str = "encryption key";

/// Secrets-manager field label for the OTA password.
pub const OTA_PASSWORD_FIELD: &str = "ota password";

/// Random bytes in the API encryption key (base64 encoded).
pub const ENCRYPTION_KEY_BYTES: usize = 32;

/// Random bytes in the OTA password (hex encoded).
pub const OTA_PASSWORD_BYTES: usize = 16;
