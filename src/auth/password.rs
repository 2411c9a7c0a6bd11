// src/auth/password.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SALT_BYTES: usize = 16;
const SCHEME: &str = "sha256";

#[cfg(not(test))]
const ROUNDS: u32 = 100_000;
#[cfg(test)]
const ROUNDS: u32 = 1_000;

/// Stored values claiming more rounds than this are treated as corrupt.
#[cfg(test)]
const MAX_ROUNDS: u32 = 10_000_000;

/// Hash a password with a fresh random salt from the OS RNG.
/// Output looks like `sha256$<rounds>$<salt>$<digest>`, salt and digest in
/// URL-safe base64.
pub fn hash_password(password: &str) -> String {
    let mut rng = OsRng;
    hash_password_with(&mut rng, password)
}

pub fn hash_password_with<R: RngCore>(rng: &mut R, password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rng.fill_bytes(&mut salt);
    let digest = stretch(&salt, password, ROUNDS);
    format!("{SCHEME}${ROUNDS}${}${}", b64(&salt), b64(&digest))
}

/// Check a password against a stored `sha256$rounds$salt$digest` string.
#[cfg(test)]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(4, '$');
    let (Some(SCHEME), Some(rounds), Some(salt), Some(digest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Some(rounds) = rounds.parse::<u32>().ok().filter(|r| (1..=MAX_ROUNDS).contains(r)) else {
        return false;
    };

    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let (Ok(salt), Ok(expected)) = (engine.decode(salt), engine.decode(digest)) else {
        return false;
    };

    hashes_equal(&stretch(&salt, password, rounds), &expected)
}

/// Repeated salted SHA-256. Each round feeds the previous digest back in.
fn stretch(salt: &[u8], password: &str, rounds: u32) -> [u8; 32] {
    let mut digest: [u8; 32] = Sha256::new()
        .chain_update(salt)
        .chain_update(password.as_bytes())
        .finalize()
        .into();
    for _ in 1..rounds {
        digest = Sha256::new()
            .chain_update(digest)
            .chain_update(salt)
            .chain_update(password.as_bytes())
            .finalize()
            .into();
    }
    digest
}

/// Compare without an early exit on the first differing byte.
#[cfg(test)]
fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

fn b64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
