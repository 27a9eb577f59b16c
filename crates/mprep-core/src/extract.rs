//! Local extractor: copy the model weights blob out of an Ollama-style
//! store into the assets directory.
//!
//! Every missing precondition (no store root, no manifest, no matching
//! layer, no blob) stops the procedure with a NotFound diagnostic before
//! anything is written. The copy itself is verbatim; the blob is typically
//! GGUF while the consuming app expects ONNX, which is flagged but never
//! enforced here.

use crate::checksum;
use crate::config::MprepConfig;
use crate::error::MprepError;
use crate::manifest;
use crate::store;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful extraction.
#[derive(Debug)]
pub struct ExtractReport {
    pub store_root: PathBuf,
    pub blob: PathBuf,
    pub dest: PathBuf,
    /// Size of the destination file after the copy.
    pub bytes: u64,
    /// Size the manifest declared for the layer.
    pub declared_bytes: u64,
    /// Informational: destination SHA-256 vs the manifest digest.
    /// None when the digest could not be recomputed.
    pub digest_ok: Option<bool>,
}

/// Locate the store, select the weights layer and copy its blob to the
/// fixed destination name under the assets directory.
pub fn run_extract(cfg: &MprepConfig, project_root: &Path) -> Result<ExtractReport, MprepError> {
    let root = store::find_store_root(&cfg.store.candidates)
        .ok_or_else(|| MprepError::NotFound("local model store (no candidate root exists)".to_string()))?;
    tracing::info!(root = %root.display(), "found model store");

    let manifest_path = store::manifest_path(root, &cfg.store.model, &cfg.store.tag);
    if !manifest_path.is_file() {
        return Err(MprepError::NotFound(format!(
            "manifest for {}:{} at {}",
            cfg.store.model,
            cfg.store.tag,
            manifest_path.display()
        )));
    }

    let manifest_bytes = fs::read(&manifest_path)?;
    let manifest = manifest::parse(&manifest_bytes)?;
    let layer = manifest::select_weights_layer(&manifest, &cfg.store.weights_media_type)?;
    tracing::info!(
        digest = %layer.digest,
        declared_bytes = layer.size,
        "selected weights layer"
    );

    let blob = store::blob_path(root, &layer.digest)?;
    if !blob.is_file() {
        return Err(MprepError::NotFound(format!("blob {}", blob.display())));
    }

    let assets_dir = cfg.assets_dir(project_root);
    fs::create_dir_all(&assets_dir)?;
    let dest = assets_dir.join(&cfg.weights_file);
    tracing::info!(src = %blob.display(), dest = %dest.display(), "copying blob");
    fs::copy(&blob, &dest)?;

    // Success requires the destination to actually exist after the copy.
    let bytes = fs::metadata(&dest)?.len();

    let digest_ok = layer
        .digest
        .split_once(':')
        .and_then(|(_, hex)| checksum::matches_digest(&dest, hex).ok());
    match digest_ok {
        Some(true) => tracing::info!("destination digest matches manifest"),
        Some(false) => tracing::warn!("destination digest does not match manifest digest"),
        None => tracing::warn!("could not recompute destination digest"),
    }
    tracing::warn!("store blobs are typically GGUF; the app expects ONNX, conversion may be needed");

    Ok(ExtractReport {
        store_root: root.to_path_buf(),
        blob,
        dest,
        bytes,
        declared_bytes: layer.size,
        digest_ok,
    })
}
