//! Content checksums for catalog files.
//!
//! The summary endpoint reports a stable fingerprint per source file so the
//! frontend can detect catalog updates without re-downloading.

use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 checksum of a byte buffer as a lowercase hex string.
pub fn checksum_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// SHA-256 checksum of a file's contents.
pub fn checksum_file(path: &Path) -> io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(checksum_bytes(&content))
}
