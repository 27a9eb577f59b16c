//! Path logic for an Ollama-style local model store.
//!
//! A store root holds `manifests/registry.ollama.ai/library/<model>/<tag>`
//! (a JSON manifest) and `blobs/sha256-<hex>` content-addressed files.
//! Everything here is pure path construction over injectable inputs so the
//! extractor can be tested against a fake store in a temp directory.

use crate::error::MprepError;
use std::path::{Path, PathBuf};

/// Registry prefix used in the manifest sub-path.
const REGISTRY: &str = "registry.ollama.ai";

/// Default locations probed for a store root, in priority order.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".ollama").join("models"));
    }
    candidates.push(PathBuf::from("/usr/share/ollama/models"));
    candidates.push(PathBuf::from("/var/lib/ollama/models"));
    candidates.push(PathBuf::from("/opt/ollama/models"));
    candidates
}

/// Returns the first candidate that exists as a directory. Candidates are
/// probed in order; there is no merging across multiple existing roots.
pub fn find_store_root(candidates: &[PathBuf]) -> Option<&Path> {
    candidates.iter().map(PathBuf::as_path).find(|p| p.is_dir())
}

/// Path of the manifest for `<model>:<tag>` under a store root.
pub fn manifest_path(root: &Path, model: &str, tag: &str) -> PathBuf {
    root.join("manifests")
        .join(REGISTRY)
        .join("library")
        .join(model)
        .join(tag)
}

/// Resolve a layer digest (`sha256:<hex>`) to its blob path under the store.
/// Blobs are named `sha256-<hex>` regardless of the digest's algorithm prefix.
pub fn blob_path(root: &Path, digest: &str) -> Result<PathBuf, MprepError> {
    let (_, hex) = digest.split_once(':').ok_or_else(|| {
        MprepError::NotFound(format!("blob for malformed digest {digest:?}"))
    })?;
    Ok(root.join("blobs").join(format!("sha256-{hex}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_candidate_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let candidates = vec![
            PathBuf::from("/nonexistent/ollama/models"),
            a.path().to_path_buf(),
            b.path().to_path_buf(),
        ];
        assert_eq!(find_store_root(&candidates), Some(a.path()));
    }

    #[test]
    fn no_existing_candidate_is_none() {
        let candidates = vec![
            PathBuf::from("/nonexistent/one"),
            PathBuf::from("/nonexistent/two"),
        ];
        assert!(find_store_root(&candidates).is_none());
    }

    #[test]
    fn a_file_is_not_a_store_root() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let candidates = vec![f.path().to_path_buf()];
        assert!(find_store_root(&candidates).is_none());
    }

    #[test]
    fn manifest_path_layout() {
        let p = manifest_path(Path::new("/store"), "phi3.5", "3.8b");
        assert_eq!(
            p,
            Path::new("/store/manifests/registry.ollama.ai/library/phi3.5/3.8b")
        );
    }

    #[test]
    fn blob_path_strips_algorithm_prefix() {
        let p = blob_path(Path::new("/store"), "sha256:deadbeef").unwrap();
        assert_eq!(p, Path::new("/store/blobs/sha256-deadbeef"));
    }

    #[test]
    fn blob_path_malformed_digest_is_not_found() {
        let err = blob_path(Path::new("/store"), "deadbeef").unwrap_err();
        assert!(matches!(err, MprepError::NotFound(_)));
    }
}
