//! Encryption at rest for classified entries.
//!
//! Classified content is encrypted with a single static key:
//! - **Age** X25519 identity kept in a key file, generated on first use
//! - Authenticated encryption per entry, base64-encoded for the text column
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading classified content from a copied database file
//!
//! We do NOT defend against:
//! - Theft of the key file alongside the database
//! - Compromised OS / access to a running session
//!
//! Losing or replacing the key file makes every previously encrypted entry
//! permanently unreadable.

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt};
pub use key::{ensure_key, load_key, AtRestKey};

use crate::storage::types::Classification;

/// Whether content with this classification must be encrypted before storage.
pub fn should_encrypt(classification: Classification) -> bool {
    matches!(
        classification,
        Classification::Classified | Classification::TopSecret
    )
}
