//! Access token issuance and validation.
//!
//! Tokens are compact HS256 JWS strings carrying the member email as `sub`.
//! They expire [`ACCESS_TOKEN_VALID_SECS`] seconds after issuance and are
//! never revoked server-side.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::key::{derive_key, SigningKey};
use crate::{IaiqError, Result};

/// Access token lifetime: 15 minutes.
pub const ACCESS_TOKEN_VALID_SECS: i64 = 15 * 60;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (member email).
    pub sub: String,
    /// Issued at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Token ID.
    #[serde(default)]
    pub jti: String,
}

/// Issues and validates access tokens with a fixed signing key.
#[derive(Clone)]
pub struct TokenProvider {
    key: SigningKey,
    validation: Validation,
}

impl TokenProvider {
    /// Build a provider from the configured secret.
    ///
    /// The key is derived once here and reused for every call.
    pub fn new(secret: &str) -> Result<Self> {
        let key = derive_key(secret)?;

        // Expiry is compared against the caller's clock in `decode_at`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Ok(Self { key, validation })
    }

    /// Issue a token for `subject` at the current time.
    pub fn issue(&self, subject: &str) -> Result<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if issued at `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + ACCESS_TOKEN_VALID_SECS,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.key.encoding_key()).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            IaiqError::Internal("failed to sign token".to_string())
        })
    }

    /// Verify signature and expiry at the current time.
    pub fn validate(&self, token: &str) -> Result<()> {
        self.validate_at(token, Utc::now())
    }

    /// Verify signature and expiry at `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<()> {
        self.decode_at(token, now).map(|_| ())
    }

    /// Validate the token and return its subject.
    pub fn extract_subject(&self, token: &str) -> Result<String> {
        self.extract_subject_at(token, Utc::now())
    }

    /// Validate the token at `now` and return its subject.
    pub fn extract_subject_at(&self, token: &str, now: DateTime<Utc>) -> Result<String> {
        self.decode_at(token, now).map(|claims| claims.sub)
    }

    /// Decode and fully validate a token at `now`.
    ///
    /// The signature is checked first, so a forged expired token is reported
    /// as malformed rather than expired. A token is live while `now < exp`.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims> {
        let data = decode::<Claims>(token, self.key.decoding_key(), &self.validation).map_err(
            |e| {
                debug!("JWT validation failed: {:?}", e.kind());
                IaiqError::TokenMalformed(format!("{:?}", e.kind()))
            },
        )?;

        if now.timestamp() >= data.claims.exp {
            debug!("JWT expired for subject {}", data.claims.sub);
            return Err(IaiqError::TokenExpired);
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider").finish_non_exhaustive()
    }
}
