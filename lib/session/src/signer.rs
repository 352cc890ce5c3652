//! HMAC-SHA256 sign/verify primitive for cookie payloads.
//!
//! Signed values have the form `payload_b64.signature_b64`, both parts
//! base64url without padding. The MAC is computed over the encoded
//! payload so the separator is unambiguous.
//!
//! Secret rotation: signing always uses the first configured secret,
//! verification accepts a signature produced by any of them.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies cookie payloads with a set of rotating secrets.
#[derive(Debug, Clone)]
pub struct CookieSigner {
    secrets: Vec<String>,
}

impl CookieSigner {
    /// Creates a signer from a non-empty secret list, newest first.
    ///
    /// The caller (`SessionConfig`) guarantees the list is non-empty.
    #[must_use]
    pub fn new(secrets: Vec<String>) -> Self {
        debug_assert!(!secrets.is_empty());
        Self { secrets }
    }

    /// Signs a payload, returning the encoded `payload.signature` value.
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        let signature = mac_for(&self.secrets[0], encoded.as_bytes());
        format!("{}.{}", encoded, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verifies a signed value and returns the decoded payload.
    ///
    /// Returns `None` for anything that does not carry a valid
    /// signature under one of the configured secrets.
    #[must_use]
    pub fn verify(&self, value: &str) -> Option<Vec<u8>> {
        let (encoded, signature_b64) = value.rsplit_once('.')?;
        let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

        let verified = self.secrets.iter().any(|secret| {
            let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
                .expect("HMAC accepts keys of any length");
            mac.update(encoded.as_bytes());
            mac.verify_slice(&signature).is_ok()
        });
        if !verified {
            return None;
        }

        URL_SAFE_NO_PAD.decode(encoded).ok()
    }
}

fn mac_for(secret: &str, data: &[u8]) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
