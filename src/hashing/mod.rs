//! BLAKE3 helpers for cache keys and deterministic seeds.

/// Hashes a source identifier (usually an article URL) into a result-cache key.
#[inline]
pub fn hash_source_id(source_id: &str) -> [u8; 32] {
    *blake3::hash(source_id.as_bytes()).as_bytes()
}

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used to seed the stub embedder. Unlike `DefaultHasher`, the value is stable
/// across processes and Rust releases, so stub embeddings are reproducible.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
