// src/session/token.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// Table key for a session. Only the digest of a cookie value is kept, so
/// a dump of the table cannot be replayed as cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey([u8; 32]);

impl SessionKey {
    pub fn of(token: &str) -> Self {
        Self(Sha256::digest(token.as_bytes()).into())
    }
}

/// New cookie value from the OS RNG.
pub fn issue_token() -> String {
    issue_token_with(&mut OsRng)
}

/// 32 random bytes as unpadded URL-safe base64 (43 chars), usable in a
/// cookie without quoting.
pub fn issue_token_with<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}
