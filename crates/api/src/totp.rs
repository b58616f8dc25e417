//! Time-based one-time passwords (RFC 6238) for unlocking two-factor accounts.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::ApiError;

type HmacSha1 = Hmac<Sha1>;

/// Length of one TOTP time step in seconds.
pub const TIME_STEP: u64 = 30;
/// Number of digits in a generated code.
pub const DIGITS: u32 = 6;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decodes an RFC 4648 base32 secret.
///
/// Case, spaces and trailing `=` padding are ignored so secrets can be
/// pasted the way authenticator apps display them.
pub fn decode_base32(secret: &str) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::with_capacity(secret.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for c in secret.chars().filter(|c| !c.is_whitespace() && *c != '=') {
        let upper = c.to_ascii_uppercase();
        let value = BASE32_ALPHABET
            .iter()
            .position(|&b| char::from(b) == upper)
            .ok_or_else(|| ApiError::InvalidSharedSecret(format!("'{c}' is not a base32 character")))?;
        buffer = (buffer << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    if bytes.is_empty() {
        return Err(ApiError::InvalidSharedSecret("secret is empty".into()));
    }
    Ok(bytes)
}

/// HOTP value for `counter` (RFC 4226), zero-padded to [`DIGITS`].
pub fn hotp(key: &[u8], counter: u64) -> Result<String, ApiError> {
    let mut mac = HmacSha1::new_from_slice(key).map_err(|e| ApiError::InvalidSharedSecret(e.to_string()))?;
    mac.update(&counter.to_be_bytes());
    let hash = mac.finalize().into_bytes();

    let offset = usize::from(hash[hash.len() - 1] & 0x0f);
    let truncated = u32::from_be_bytes([hash[offset], hash[offset + 1], hash[offset + 2], hash[offset + 3]]) & 0x7fff_ffff;
    let code = truncated % 10u32.pow(DIGITS);
    Ok(format!("{code:0width$}", width = DIGITS as usize))
}

/// TOTP value of a base32 `shared_secret` at `unix_time`.
pub fn code_at(shared_secret: &str, unix_time: u64) -> Result<String, ApiError> {
    let key = decode_base32(shared_secret)?;
    hotp(&key, unix_time / TIME_STEP)
}

/// TOTP value of a base32 `shared_secret` for the current time.
pub fn current_code(shared_secret: &str) -> Result<String, ApiError> {
    let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
    code_at(shared_secret, now)
}
