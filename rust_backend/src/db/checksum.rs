//! Checksums of raw ingestion batches.

use sha2::{Digest, Sha256};

/// Hex digits of the batch checksum used in storage keys.
pub const BATCH_TAG_LEN: usize = 12;

/// Calculate SHA-256 checksum of a raw batch.
///
/// # Arguments
/// * `content` - Raw delimited text exactly as received
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Short prefix of a checksum that namespaces one batch's storage keys.
pub fn batch_tag(checksum: &str) -> &str {
    &checksum[..checksum.len().min(BATCH_TAG_LEN)]
}
