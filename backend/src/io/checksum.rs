//! Checksum calculation for identifying the loaded dataset.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of the dataset file content.
///
/// # Arguments
/// * `content` - Raw CSV content
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
