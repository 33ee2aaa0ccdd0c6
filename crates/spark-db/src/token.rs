use rand::Rng;
use sha2::{Digest, Sha256};

/// Random bytes per token before hex encoding (32 bytes = 64 hex chars).
pub const TOKEN_BYTES: usize = 32;

/// A fresh bearer token from the thread-local CSPRNG.
pub fn generate() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

/// Tokens are stored only as their SHA-256 digest.
pub fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
