//! Content encryption for classified entries.
//!
//! Ciphertext is an age message (X25519 recipient) encoded with standard
//! base64 so it can live in the same TEXT column as plaintext content.

use std::io::{Read, Write};
use std::iter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::key::AtRestKey;
use crate::error::{DecryptionError, LogError, Result};

/// Encrypt `plaintext` under `key`.
///
/// # Errors
///
/// Returns `LogError::Crypto` if the age stream cannot be written.
pub fn encrypt(plaintext: &str, key: &AtRestKey) -> Result<String> {
    let encryptor =
        age::Encryptor::with_recipients(iter::once(key.recipient() as &dyn age::Recipient))
            .map_err(|e| LogError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| LogError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| LogError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| LogError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(STANDARD.encode(encrypted))
}

/// Decrypt text produced by [`encrypt`].
///
/// # Errors
///
/// Returns `DecryptionError` if the text is not base64, the payload is
/// malformed or truncated, it was encrypted under another key, or the
/// plaintext is not UTF-8.
pub fn decrypt(ciphertext: &str, key: &AtRestKey) -> std::result::Result<String, DecryptionError> {
    let encrypted = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| DecryptionError::Encoding(e.to_string()))?;

    let decryptor = age::Decryptor::new(encrypted.as_slice())
        .map_err(|e| DecryptionError::Malformed(e.to_string()))?;

    let mut reader = decryptor
        .decrypt(iter::once(key.identity() as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => DecryptionError::WrongKey,
            other => DecryptionError::Malformed(other.to_string()),
        })?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| DecryptionError::Malformed(e.to_string()))?;

    String::from_utf8(decrypted).map_err(|_| DecryptionError::NotUtf8)
}
