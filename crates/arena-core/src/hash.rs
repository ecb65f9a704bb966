//! Short deterministic identifiers for challenge instances.
//!
//! A challenge instance is shared by every player, so user-facing handles are
//! derived per (instance, user, salt). The handle is a SHAKE256 digest squeezed
//! to 8 bytes, base36-encoded and cut to 8 characters. Collisions are accepted:
//! the handle is for humans, not for security.

use std::io::{Read, Write};

use sha3::Shake256;
use sha3::digest::ExtendableOutput;
use thiserror::Error;

/// Number of digest bytes squeezed from the sponge.
pub const HASH_BYTES: usize = 8;

/// Length of the returned handle, in characters.
pub const HASH_LEN: usize = 8;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Error)]
pub enum HashError {
    /// Feeding the input into the hasher failed.
    #[error("failed to write bytes to hash builder: {0}")]
    Write(#[source] std::io::Error),

    /// Squeezing output bytes from the hasher failed.
    #[error("failed to read bytes from hash builder: {0}")]
    Read(#[source] std::io::Error),
}

/// Derive the per-user handle of a challenge instance.
///
/// # Errors
///
/// Returns `HashError::Write` or `HashError::Read` if the sponge I/O fails.
/// Output is never silently zeroed or shortened on failure.
pub fn challenge_instance_prefix_hash(
    instance_id: &str,
    user_id: i64,
    salt: &str,
) -> Result<String, HashError> {
    let input = format!("{instance_id}{user_id}{salt}");

    let mut hasher = Shake256::default();
    hasher.write_all(input.as_bytes()).map_err(HashError::Write)?;

    let mut digest = [0u8; HASH_BYTES];
    let mut reader = hasher.finalize_xof();
    reader.read_exact(&mut digest).map_err(HashError::Read)?;

    let mut handle = base36_encode(&digest);
    handle.truncate(HASH_LEN);
    Ok(handle)
}

/// Encode bytes as a big-endian base36 number.
///
/// Each leading zero byte contributes one leading `'0'`, so an 8-byte input
/// always yields at least 8 characters.
fn base36_encode(bytes: &[u8; HASH_BYTES]) -> String {
    let mut value = u64::from_be_bytes(*bytes);
    let mut digits = Vec::with_capacity(13 + HASH_BYTES);
    while value > 0 {
        #[allow(clippy::cast_possible_truncation)]
        digits.push(BASE36_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    for _ in bytes.iter().take_while(|byte| **byte == 0) {
        digits.push(BASE36_ALPHABET[0]);
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}
