//! Clubhouse webhook signatures
//!
//! Clubhouse signs each delivery with HMAC-SHA256 over the raw body,
//! keyed by the webhook secret, and sends the hex digest in the
//! `Clubhouse-Signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

pub const SIGNATURE_HEADER: &str = "Clubhouse-Signature";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("signature is not valid hex: {0}")]
    Malformed(#[from] hex::FromHexError),

    #[error("signature does not match payload")]
    Mismatch,
}

fn mac_for(secret: &str, payload: &[u8]) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    mac
}

/// Hex-encoded HMAC-SHA256 of a payload, as Clubhouse sends it
#[cfg(test)]
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    hex::encode(mac_for(secret, payload).finalize().into_bytes())
}

/// Check a hex signature against a payload in constant time
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> Result<(), SignatureError> {
    let expected = hex::decode(signature.trim())?;
    mac_for(secret, payload)
        .verify_slice(&expected)
        .map_err(|_| SignatureError::Mismatch)
}
