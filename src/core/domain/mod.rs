//! Domain types.

mod identity;
mod layout;
mod secret;

pub use identity::{DeviceIdentity, DeviceType};
pub use layout::{DeviceLayout, PackageLayout, SecretSection};
pub use secret::Secrets;
