//! Device identity.
//!
//! The normalized names and slugs a device is created from.

use crate::core::validation::{normalize_name, slugify};
use crate::error::Result;

/// A device's normalized friendly name and optional type, plus their slugs.
///
/// Fields are private so an identity can only be obtained through
/// [`DeviceIdentity::parse`], which guarantees every name and slug is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    friendly_name: String,
    device_slug: String,
    kind: Option<DeviceType>,
}

/// The type a device belongs to, sharing one base package and one secret pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceType {
    name: String,
    slug: String,
}

impl DeviceType {
    /// Normalized type name (e.g. "Heat Pump")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type slug (e.g. "heat-pump")
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl DeviceIdentity {
    /// Normalize and slugify the raw names entered by the user.
    ///
    /// A type name that is given but blank is rejected rather than treated
    /// as untyped.
    pub fn parse(friendly_name: &str, type_name: Option<&str>) -> Result<Self> {
        let friendly_name = normalize_name("friendly name", friendly_name)?;
        let device_slug = slugify(&friendly_name)?;

        let kind = match type_name {
            Some(raw) => {
                let name = normalize_name("type name", raw)?;
                let slug = slugify(&name)?;
                Some(DeviceType { name, slug })
            }
            None => None,
        };

        Ok(Self {
            friendly_name,
            device_slug,
            kind,
        })
    }

    /// Normalized friendly name (e.g. "Sensor One")
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    /// Device slug (e.g. "sensor-one")
    pub fn device_slug(&self) -> &str {
        &self.device_slug
    }

    /// Device type, if any
    pub fn device_type(&self) -> Option<&DeviceType> {
        self.kind.as_ref()
    }
}

impl std::fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} ({})", self.friendly_name, kind.name),
            None => write!(f, "{}", self.friendly_name),
        }
    }
}
