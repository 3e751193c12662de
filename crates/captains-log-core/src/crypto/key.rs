//! At-rest key lifecycle.
//!
//! The key is an age X25519 identity stored as its `AGE-SECRET-KEY-1...`
//! string. It is generated once, written with create-if-absent semantics,
//! and loaded on every later run.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use age::x25519::{Identity, Recipient};
use secrecy::ExposeSecret;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{LogError, Result};

/// The symmetric-at-rest key used for classified content.
///
/// Immutable once loaded; share it by reference.
pub struct AtRestKey {
    identity: Identity,
    recipient: Recipient,
}

impl AtRestKey {
    /// Generate a fresh key.
    pub fn generate() -> Self {
        Self::from_identity(Identity::generate())
    }

    fn from_identity(identity: Identity) -> Self {
        let recipient = identity.to_public();
        Self {
            identity,
            recipient,
        }
    }

    /// Parse a key from its encoded form.
    ///
    /// # Errors
    ///
    /// Returns `LogError::Crypto` if the text is not an age X25519 identity.
    pub fn parse(encoded: &str) -> Result<Self> {
        let identity = Identity::from_str(encoded.trim())
            .map_err(|e| LogError::Crypto(format!("Invalid key: {}", e)))?;
        Ok(Self::from_identity(identity))
    }

    pub(crate) fn identity(&self) -> &Identity {
        &self.identity
    }

    pub(crate) fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Public half of the key, safe to display.
    pub fn fingerprint(&self) -> String {
        self.recipient.to_string()
    }

    fn encoded(&self) -> Zeroizing<String> {
        Zeroizing::new(self.identity.to_string().expose_secret().to_string())
    }
}

impl std::fmt::Debug for AtRestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtRestKey")
            .field("identity", &"[REDACTED]")
            .field("recipient", &self.fingerprint())
            .finish()
    }
}

/// Load the key at `path`, generating and persisting one if absent.
///
/// If another process creates the file between the existence check and our
/// write, the file it wrote wins and is loaded instead.
///
/// # Errors
///
/// Returns `LogError::Io` if the file cannot be created or read, and
/// `LogError::Crypto` if an existing file does not hold a valid key.
pub fn ensure_key(path: &Path) -> Result<AtRestKey> {
    if path.exists() {
        return load_key(path);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let key = AtRestKey::generate();
    match write_new_key_file(path, &key) {
        Ok(()) => {
            debug!(path = %path.display(), recipient = %key.fingerprint(), "generated at-rest key");
            Ok(key)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => load_key(path),
        Err(err) => Err(err.into()),
    }
}

/// Load an existing key file.
///
/// # Errors
///
/// Returns `LogError::Io` if the file cannot be read and `LogError::Crypto`
/// if it is empty or malformed.
pub fn load_key(path: &Path) -> Result<AtRestKey> {
    let contents = Zeroizing::new(fs::read_to_string(path)?);
    if contents.trim().is_empty() {
        return Err(LogError::Crypto(format!(
            "Key file {} is empty",
            path.display()
        )));
    }
    let key = AtRestKey::parse(&contents).map_err(|e| match e {
        LogError::Crypto(msg) => LogError::Crypto(format!("{} ({})", msg, path.display())),
        other => other,
    })?;
    debug!(path = %path.display(), "loaded at-rest key");
    Ok(key)
}

fn write_new_key_file(path: &Path, key: &AtRestKey) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    let encoded = key.encoded();
    file.write_all(encoded.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_key_generates_then_reuses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys").join("encryption.key");

        let first = ensure_key(&path).unwrap();
        assert!(path.exists());
        let second = ensure_key(&path).unwrap();

        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_key_file_holds_age_identity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        ensure_key(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("AGE-SECRET-KEY-1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        ensure_key(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_existing_file_is_never_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        let original = AtRestKey::generate();
        fs::write(&path, original.encoded().as_bytes()).unwrap();

        let loaded = ensure_key(&path).unwrap();
        assert_eq!(loaded.fingerprint(), original.fingerprint());
    }

    #[test]
    fn test_malformed_key_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        fs::write(&path, "not a key").unwrap();

        let result = ensure_key(&path);
        assert!(matches!(result, Err(LogError::Crypto(_))));
    }

    #[test]
    fn test_empty_key_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        fs::write(&path, "").unwrap();

        let err = load_key(&path).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_debug_redacts_identity() {
        let key = AtRestKey::generate();
        let debug_output = format!("{:?}", key);

        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("AGE-SECRET-KEY"));
    }
}
