//! SHA-256 of files on disk, computed on demand (never inline with a
//! transfer). Used by the extractor's informational digest comparison and
//! the `checksum` CLI command. Downloaded files are deliberately not hash
//! verified.

use crate::error::MprepError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CHUNK: usize = 128 * 1024;

/// SHA-256 of a file as lowercase hex. Reads in chunks; fine for multi-GB blobs.
pub fn sha256_path(path: &Path) -> Result<String, MprepError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// True if the file's SHA-256 equals `expected_hex` (case-insensitive).
pub fn matches_digest(path: &Path, expected_hex: &str) -> Result<bool, MprepError> {
    Ok(sha256_path(path)?.eq_ignore_ascii_case(expected_hex))
}
