//! Asset verification: read-only classification of the bundle plus
//! informational source and build probes.
//!
//! Every check is independent and an absent or unreadable file degrades to
//! "not found"; nothing in this module returns an error or mutates the
//! filesystem. The aggregate pass condition is deliberately lenient (all
//! three assets present and total size above a 100 MB floor), well below
//! the full-model threshold; the per-asset classification carries the
//! stronger signal.

use crate::config::{MprepConfig, SourceProbe, Thresholds};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-asset classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// No file at the expected path.
    Missing,
    /// Weights file below the placeholder threshold.
    TooSmall,
    /// Weights file present but below the full-model threshold.
    PartialOrPlaceholder,
    /// Companion file present (companions get no size check).
    Present,
    /// Weights file at or above the full-model threshold.
    FullModel,
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Missing => "MISSING",
            AssetStatus::TooSmall => "TOO SMALL",
            AssetStatus::PartialOrPlaceholder => "PARTIAL/PLACEHOLDER",
            AssetStatus::Present => "PRESENT",
            AssetStatus::FullModel => "FULL MODEL",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, AssetStatus::Missing)
    }
}

/// Classification of one asset file.
#[derive(Debug)]
pub struct AssetCheck {
    pub name: String,
    pub description: &'static str,
    pub status: AssetStatus,
    pub bytes: Option<u64>,
}

/// One marker probed inside a source file.
#[derive(Debug)]
pub struct MarkerStatus {
    pub marker: String,
    pub found: bool,
}

/// Informational status of one companion source file.
#[derive(Debug)]
pub struct SourceStatus {
    pub path: String,
    pub exists: bool,
    pub markers: Vec<MarkerStatus>,
}

/// Full verification report.
#[derive(Debug)]
pub struct VerifyReport {
    pub assets_dir: PathBuf,
    pub assets_dir_exists: bool,
    pub assets: Vec<AssetCheck>,
    /// Total bytes across the present assets.
    pub total_bytes: u64,
    pub all_present: bool,
    /// Aggregate result: all assets present and total above the floor.
    pub pass: bool,
    /// Informational only; never affects `pass`.
    pub sources: Vec<SourceStatus>,
    /// Build-file probe for the compression-exclusion marker.
    pub build: SourceStatus,
}

/// Classify one asset by its size (None = absent). The weights file is
/// banded against the thresholds; companions only need to exist. The
/// full-model boundary is inclusive.
pub fn classify_asset(bytes: Option<u64>, is_weights: bool, t: &Thresholds) -> AssetStatus {
    match bytes {
        None => AssetStatus::Missing,
        Some(_) if !is_weights => AssetStatus::Present,
        Some(n) if n >= t.full_model_bytes => AssetStatus::FullModel,
        Some(n) if n >= t.placeholder_bytes => AssetStatus::PartialOrPlaceholder,
        Some(_) => AssetStatus::TooSmall,
    }
}

/// Inspect the assets directory and companion sources. Infallible by
/// design: absence of anything inspected is an outcome, not an error.
pub fn run_verify(cfg: &MprepConfig, project_root: &Path) -> VerifyReport {
    let assets_dir = cfg.assets_dir(project_root);
    let assets_dir_exists = assets_dir.is_dir();

    let descriptors: [(&str, &'static str, bool); 3] = [
        (cfg.weights_file.as_str(), "core ONNX model file", true),
        (cfg.tokenizer_file.as_str(), "tokenizer configuration", false),
        (cfg.config_file.as_str(), "model configuration", false),
    ];

    let mut assets = Vec::with_capacity(descriptors.len());
    let mut total_bytes = 0u64;
    for (name, description, is_weights) in descriptors {
        let bytes = file_len(&assets_dir.join(name));
        total_bytes += bytes.unwrap_or(0);
        assets.push(AssetCheck {
            name: name.to_string(),
            description,
            status: classify_asset(bytes, is_weights, &cfg.thresholds),
            bytes,
        });
    }

    let all_present = assets.iter().all(|a| a.status.is_present());
    let pass = all_present && total_bytes > cfg.thresholds.min_total_bytes;

    let sources = cfg
        .source_probes
        .iter()
        .map(|probe| probe_source(project_root, probe))
        .collect();

    let build = probe_source(
        project_root,
        &SourceProbe {
            path: cfg.build_file.clone(),
            markers: vec![cfg.build_marker.clone()],
        },
    );

    VerifyReport {
        assets_dir,
        assets_dir_exists,
        assets,
        total_bytes,
        all_present,
        pass,
        sources,
        build,
    }
}

fn probe_source(project_root: &Path, probe: &SourceProbe) -> SourceStatus {
    let path = project_root.join(&probe.path);
    // Unreadable content degrades to "markers not found", not a failure.
    let content = fs::read_to_string(&path).ok();
    SourceStatus {
        path: probe.path.clone(),
        exists: path.is_file(),
        markers: probe
            .markers
            .iter()
            .map(|marker| MarkerStatus {
                marker: marker.clone(),
                found: content
                    .as_deref()
                    .map(|c| c.contains(marker.as_str()))
                    .unwrap_or(false),
            })
            .collect(),
    }
}

fn file_len(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}
