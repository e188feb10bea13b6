//! Text rendered for a new device.
//!
//! All functions are pure: the same identity and layout always produce the
//! same text.

use crate::core::domain::{DeviceIdentity, DeviceLayout};

/// Generated text fragments, written only when the plan is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBlocks {
    /// Lines appended to the secrets template
    pub template_block: String,
    /// Contents of the device config file
    pub device_yaml: String,
    /// Contents of the type's base package, for typed devices
    pub base_package_yaml: Option<String>,
}

impl PlanBlocks {
    pub fn render(identity: &DeviceIdentity, layout: &DeviceLayout) -> Self {
        Self {
            template_block: template_block(layout),
            device_yaml: device_yaml(layout),
            base_package_yaml: identity
                .device_type()
                .map(|kind| base_package_yaml(kind.name(), layout)),
        }
    }
}

/// Template lines in `op inject` syntax, preceded by a blank separator line.
pub fn template_block(layout: &DeviceLayout) -> String {
    format!(
        "\n# {section}\n{key}: \"{{{{ {key_ref} }}}}\"\n{ota}: \"{{{{ {ota_ref} }}}}\"\n",
        section = layout.section.name,
        key = layout.encryption_key_name,
        key_ref = layout.encryption_key_ref,
        ota = layout.ota_password_name,
        ota_ref = layout.ota_password_ref,
    )
}

/// Device config file.
///
/// Untyped devices carry their own `api`/`ota` blocks; typed devices pull
/// them from the type's base package instead.
pub fn device_yaml(layout: &DeviceLayout) -> String {
    let mut yaml = format!(
        "substitutions:\n  name: {}\n  friendly_name: {}\n",
        layout.config_name, layout.config_friendly_name
    );

    match &layout.package {
        Some(package) => {
            yaml.push_str(&format!(
                "\npackages:\n  {}: !include {}\n",
                package.key, package.include
            ));
        }
        None => {
            yaml.push('\n');
            yaml.push_str(ESPHOME_BLOCK);
            yaml.push('\n');
            yaml.push_str(&secret_blocks(layout));
        }
    }

    yaml
}

/// Shared package for every device of a type.
pub fn base_package_yaml(type_name: &str, layout: &DeviceLayout) -> String {
    format!(
        "# Shared configuration for {} devices.\n\
         #\n\
         # Required substitutions:\n\
         #   name: node name of the including device\n\
         #   friendly_name: display name of the including device\n\
         \n{}\n{}",
        type_name,
        ESPHOME_BLOCK,
        secret_blocks(layout)
    )
}

const ESPHOME_BLOCK: &str = "esphome:\n  name: ${name}\n  friendly_name: ${friendly_name}\n";

fn secret_blocks(layout: &DeviceLayout) -> String {
    format!(
        "api:\n  encryption:\n    key: !secret {}\n\nota:\n  - platform: esphome\n    password: !secret {}\n",
        layout.encryption_key_name, layout.ota_password_name
    )
}
