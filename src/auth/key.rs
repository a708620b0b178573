//! Signing key derivation.

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::{IaiqError, Result};

/// Minimum secret length in bytes for HMAC-SHA256 (256 bits).
pub const MIN_SECRET_LENGTH: usize = 32;

/// Symmetric HS256 key pair derived from the configured secret.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Key used to sign tokens.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Key used to verify token signatures.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

/// Derive the signing key from the UTF-8 bytes of `secret`.
///
/// Fails with `Configuration` if the secret is empty or shorter than
/// [`MIN_SECRET_LENGTH`] bytes.
pub fn derive_key(secret: &str) -> Result<SigningKey> {
    if secret.is_empty() {
        return Err(IaiqError::Configuration("JWT secret is not set".to_string()));
    }
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(IaiqError::Configuration(format!(
            "JWT secret is {} bytes; HS256 requires at least {MIN_SECRET_LENGTH}",
            secret.len()
        )));
    }

    let bytes = secret.as_bytes();
    Ok(SigningKey {
        encoding: EncodingKey::from_secret(bytes),
        decoding: DecodingKey::from_secret(bytes),
    })
}
