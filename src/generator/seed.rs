// Seed derivation for reproducible question sets

use sha2::{Digest, Sha256};

/// Stable 64-bit seed for a seed string (first 8 bytes of its SHA256)
pub fn seed_from_str(seed: &str) -> u64 {
    let digest = Sha256::digest(seed.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
