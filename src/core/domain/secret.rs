//! Generated secret pair.

use zeroize::Zeroizing;

/// Encryption key and OTA password generated for one run.
///
/// Both values are wiped from memory when dropped.
pub struct Secrets {
    encryption_key: Zeroizing<String>,
    ota_password: Zeroizing<String>,
}

impl Secrets {
    pub fn new(encryption_key: String, ota_password: String) -> Self {
        Self {
            encryption_key: Zeroizing::new(encryption_key),
            ota_password: Zeroizing::new(ota_password),
        }
    }

    /// Base64 API encryption key
    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }

    /// Hex OTA password
    pub fn ota_password(&self) -> &str {
        &self.ota_password
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("encryption_key", &"<redacted>")
            .field("ota_password", &"<redacted>")
            .finish()
    }
}
