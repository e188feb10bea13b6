//! Derived names, keys and paths for a device.

use std::path::PathBuf;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::DeviceIdentity;

/// Where a key/password pair lives: a single device or a whole device type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSection {
    /// Slug of the device or type (e.g. "heat-pump")
    pub slug: String,
    /// Section label in the secrets manager (e.g. "Heat Pump")
    pub name: String,
}

impl SecretSection {
    /// Prefix used for YAML secret keys (e.g. "heat_pump").
    pub fn key_prefix(&self) -> String {
        self.slug.replace('-', "_")
    }

    /// Field path on the secrets-manager item (e.g. "Heat Pump.encryption key").
    pub fn field_path(&self, field: &str) -> String {
        format!("{}.{}", self.name, field)
    }
}

/// Everything derived from a [`DeviceIdentity`] and the repository settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLayout {
    /// ESPHome node name, device first (e.g. "sensor-one-heat-pump")
    pub config_name: String,
    /// ESPHome friendly name (e.g. "Sensor One Heat Pump")
    pub config_friendly_name: String,
    /// Device file stem, type first so same-typed devices sort together
    pub config_file_slug: String,
    pub section: SecretSection,
    pub encryption_key_name: String,
    pub ota_password_name: String,
    pub encryption_key_field: String,
    pub ota_password_field: String,
    pub encryption_key_ref: String,
    pub ota_password_ref: String,
    pub device_file: PathBuf,
    pub package: Option<PackageLayout>,
}

/// Shared base package of a device type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    /// Key under `packages:` in the device file (e.g. "heat_pump_base")
    pub key: String,
    /// Path of the include, relative to the config directory
    pub include: String,
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl DeviceLayout {
    /// Derive the layout of `identity` inside the repository described by `settings`.
    pub fn derive(identity: &DeviceIdentity, settings: &Settings) -> Self {
        let device_slug = identity.device_slug();

        let (config_name, config_friendly_name, config_file_slug, section) =
            match identity.device_type() {
                Some(kind) => (
                    format!("{}-{}", device_slug, kind.slug()),
                    format!("{} {}", identity.friendly_name(), kind.name()),
                    format!("{}-{}", kind.slug(), device_slug),
                    SecretSection {
                        slug: kind.slug().to_string(),
                        name: kind.name().to_string(),
                    },
                ),
                None => (
                    device_slug.to_string(),
                    identity.friendly_name().to_string(),
                    device_slug.to_string(),
                    SecretSection {
                        slug: device_slug.to_string(),
                        name: identity.friendly_name().to_string(),
                    },
                ),
            };

        let prefix = section.key_prefix();
        let reference = |field: &str| {
            format!(
                "op://{}/{}/{}/{}",
                settings.vault, settings.item, section.name, field
            )
        };

        let package = identity.device_type().map(|kind| {
            let include = format!(
                "{}/{}/{}",
                constants::PACKAGES_DIR,
                kind.slug(),
                constants::BASE_PACKAGE_FILE
            );
            let dir = settings
                .config_dir
                .join(constants::PACKAGES_DIR)
                .join(kind.slug());
            PackageLayout {
                key: format!("{}_base", kind.slug().replace('-', "_")),
                file: dir.join(constants::BASE_PACKAGE_FILE),
                dir,
                include,
            }
        });

        Self {
            device_file: settings
                .config_dir
                .join(format!("{}.yaml", config_file_slug)),
            config_name,
            config_friendly_name,
            config_file_slug,
            encryption_key_name: format!("{}_encryption_key", prefix),
            ota_password_name: format!("{}_ota_password", prefix),
            encryption_key_field: section.field_path(constants::ENCRYPTION_KEY_FIELD),
            ota_password_field: section.field_path(constants::OTA_PASSWORD_FIELD),
            encryption_key_ref: reference(constants::ENCRYPTION_KEY_FIELD),
            ota_password_ref: reference(constants::OTA_PASSWORD_FIELD),
            section,
            package,
        }
    }
}
