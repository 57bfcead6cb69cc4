//! HMAC-signed session token provider.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::SessionIdentity;
use crate::domain::ports::SessionProvider;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Session provider validating self-contained signed tokens.
///
/// Tokens have the form `<identity>.<nonce>.<signature>` where the signature
/// is the hex-encoded HMAC-SHA256 of `<identity>.<nonce>` under the server
/// signing secret. No server-side session state exists; a token resolves if
/// and only if its signature verifies. Tokens are minted out of band by the
/// `admin` bin.
pub struct SignedSessionProvider {
    signing_secret: String,
}

impl SignedSessionProvider {
    /// Creates a new provider.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key; must match the value used when tokens
    ///   were issued
    pub fn new(signing_secret: String) -> Self {
        Self { signing_secret }
    }

    /// Signs a payload with HMAC-SHA256 under the server secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Mints a session token for `identity`.
    ///
    /// The nonce makes repeated issuance for the same identity produce
    /// distinct tokens; it carries no meaning beyond that.
    pub fn issue(&self, identity: &str, nonce: &str) -> String {
        let payload = format!("{identity}.{nonce}");
        let signature = self.sign(&payload);
        format!("{payload}.{signature}")
    }
}

#[async_trait]
impl SessionProvider for SignedSessionProvider {
    /// Resolves a token by verifying its signature.
    ///
    /// Any structural or signature mismatch yields `Ok(None)`; this provider
    /// has no failure modes of its own.
    async fn resolve(&self, token: &str) -> Result<Option<SessionIdentity>, AppError> {
        let Some((payload, signature)) = token.rsplit_once('.') else {
            return Ok(None);
        };

        if self.sign(payload) != signature {
            return Ok(None);
        }

        // payload = "<identity>.<nonce>"; the identity may itself contain dots.
        let Some((identity, _nonce)) = payload.rsplit_once('.') else {
            return Ok(None);
        };

        if identity.is_empty() {
            return Ok(None);
        }

        Ok(Some(SessionIdentity::new(identity)))
    }
}
