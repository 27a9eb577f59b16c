//! Store manifest parsing and weights-layer selection.
//!
//! A manifest is a JSON document with a `layers` list of
//! `{mediaType, digest, size}` objects. Parsing and selection are pure over
//! the document bytes so they can be unit tested with literal JSON fixtures;
//! no filesystem access happens here.

use crate::error::MprepError;
use serde::Deserialize;

/// Parsed store manifest. Only the fields the extractor needs.
#[derive(Debug, Deserialize)]
pub struct ModelManifest {
    #[serde(default)]
    pub layers: Vec<ManifestLayer>,
}

/// One content-addressed layer of a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestLayer {
    #[serde(rename = "mediaType", default)]
    pub media_type: String,
    #[serde(default)]
    pub digest: String,
    /// Declared size in bytes; informational, the blob on disk is authoritative.
    #[serde(default)]
    pub size: u64,
}

/// Parse manifest bytes; malformed JSON is a fatal Parse error.
pub fn parse(bytes: &[u8]) -> Result<ModelManifest, MprepError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// First layer whose media type contains `marker`, or NotFound if no layer
/// matches (including the empty-layers case).
pub fn select_weights_layer<'a>(
    manifest: &'a ModelManifest,
    marker: &str,
) -> Result<&'a ManifestLayer, MprepError> {
    manifest
        .layers
        .iter()
        .find(|layer| layer.media_type.contains(marker))
        .ok_or_else(|| {
            MprepError::NotFound(format!("manifest layer with media type containing {marker:?}"))
        })
}
