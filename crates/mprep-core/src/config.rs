//! Configuration for the three procedures.
//!
//! Everything the original workflow hardcoded (URL table, size thresholds,
//! fixed paths, store candidates, source probes) lives in one structure that
//! is passed by reference into each entry point, so tests can substitute
//! directories and URLs without touching global state. Loaded from
//! `~/.config/mprep/config.toml`; a default file is written on first run.

use crate::store;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of the fetch table: logical destination name plus source URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadSpec {
    pub name: String,
    pub url: String,
}

/// Size thresholds, in bytes. Values mirror the original workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Weights file at or above this size classifies as a full model.
    pub full_model_bytes: u64,
    /// Weights file at or above this size (but below full) is a partial
    /// download or a deliberate placeholder.
    pub placeholder_bytes: u64,
    /// Aggregate verification floor: total asset bytes must exceed this.
    /// Deliberately lenient (accepts a placeholder bundle); kept verbatim.
    pub min_total_bytes: u64,
    /// Fetch batch "looks complete" when the assets directory total exceeds this.
    pub batch_complete_bytes: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            full_model_bytes: 2_000_000_000,
            placeholder_bytes: 100_000_000,
            min_total_bytes: 100_000_000,
            batch_complete_bytes: 2_000_000_000,
        }
    }
}

/// Where and what to look for in a local Ollama-style model store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Candidate store roots, probed in order; first existing directory wins.
    pub candidates: Vec<PathBuf>,
    /// Model name under `manifests/registry.ollama.ai/library/`.
    pub model: String,
    /// Version tag (the manifest file name).
    pub tag: String,
    /// Substring of a layer's media type that marks it as the model weights.
    pub weights_media_type: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            candidates: store::default_candidates(),
            model: "phi3.5".to_string(),
            tag: "3.8b".to_string(),
            weights_media_type: "application/vnd.ollama.image.model".to_string(),
        }
    }
}

/// An informational source-file probe: does the file exist, and does it
/// contain each marker string. Never affects the verifier's pass/fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceProbe {
    /// Path relative to the project root.
    pub path: String,
    /// Marker substrings expected in the file; may be empty (existence only).
    #[serde(default)]
    pub markers: Vec<String>,
}

/// Global configuration loaded from `~/.config/mprep/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MprepConfig {
    /// Target assets directory, relative to the project root. All three
    /// procedures share this convention.
    pub assets_subdir: PathBuf,
    /// Destination name of the model weights file.
    pub weights_file: String,
    /// Destination name of the tokenizer file.
    pub tokenizer_file: String,
    /// Destination name of the model config file.
    pub config_file: String,
    /// Build file checked for the compression-exclusion marker.
    pub build_file: String,
    /// Marker expected in the build file (informational).
    pub build_marker: String,
    pub thresholds: Thresholds,
    pub store: StoreConfig,
    /// Fetch table; names should match the three asset file names above.
    pub downloads: Vec<DownloadSpec>,
    /// Informational source-file probes reported by the verifier.
    pub source_probes: Vec<SourceProbe>,
}

const HF_BASE: &str = "https://huggingface.co/microsoft/Phi-3.5-mini-instruct-onnx/resolve/main";

impl Default for MprepConfig {
    fn default() -> Self {
        let weights_file = "phi-3.5-mini-instruct.onnx".to_string();
        let tokenizer_file = "phi-3.5-mini-tokenizer.json".to_string();
        let config_file = "phi-3.5-mini-config.json".to_string();
        Self {
            assets_subdir: PathBuf::from("assets/models"),
            downloads: vec![
                DownloadSpec {
                    name: weights_file.clone(),
                    url: format!(
                        "{HF_BASE}/cpu_and_mobile/cpu-int4-awq-block-128-acc-level-4/model.onnx"
                    ),
                },
                DownloadSpec {
                    name: tokenizer_file.clone(),
                    url: format!("{HF_BASE}/tokenizer.json"),
                },
                DownloadSpec {
                    name: config_file.clone(),
                    url: format!("{HF_BASE}/config.json"),
                },
            ],
            weights_file,
            tokenizer_file,
            config_file,
            build_file: "app/build.gradle.kts".to_string(),
            build_marker: "noCompress += \"onnx\"".to_string(),
            thresholds: Thresholds::default(),
            store: StoreConfig::default(),
            source_probes: default_source_probes(),
        }
    }
}

fn default_source_probes() -> Vec<SourceProbe> {
    let executors = "app/src/main/java/com/unifyai/multiaisystem/executors";
    let core = "app/src/main/java/com/unifyai/multiaisystem/core";
    vec![
        SourceProbe {
            path: format!("{executors}/LocalLLMExecutor.kt"),
            markers: vec![
                "extractModelFromAssets".to_string(),
                "validateCoreModel".to_string(),
            ],
        },
        SourceProbe {
            path: format!("{core}/CoreModelManager.kt"),
            markers: Vec::new(),
        },
        SourceProbe {
            path: format!("{core}/CoreConsciousnessManager.kt"),
            markers: Vec::new(),
        },
        SourceProbe {
            path: format!("{core}/CloudToolOrchestrator.kt"),
            markers: Vec::new(),
        },
        SourceProbe {
            path: format!("{core}/ConsciousnessOrchestrator.kt"),
            markers: Vec::new(),
        },
    ]
}

impl MprepConfig {
    /// Absolute assets directory for a given project root.
    pub fn assets_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.assets_subdir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mprep")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MprepConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MprepConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MprepConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.full_model_bytes, 2_000_000_000);
        assert_eq!(t.placeholder_bytes, 100_000_000);
        assert_eq!(t.min_total_bytes, 100_000_000);
        assert_eq!(t.batch_complete_bytes, 2_000_000_000);
    }

    #[test]
    fn default_download_table_covers_all_assets() {
        let cfg = MprepConfig::default();
        assert_eq!(cfg.downloads.len(), 3);
        let names: Vec<&str> = cfg.downloads.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&cfg.weights_file.as_str()));
        assert!(names.contains(&cfg.tokenizer_file.as_str()));
        assert!(names.contains(&cfg.config_file.as_str()));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MprepConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MprepConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.weights_file, cfg.weights_file);
        assert_eq!(parsed.assets_subdir, cfg.assets_subdir);
        assert_eq!(parsed.downloads.len(), cfg.downloads.len());
        assert_eq!(parsed.store.model, "phi3.5");
        assert_eq!(parsed.store.tag, "3.8b");
        assert_eq!(parsed.source_probes.len(), cfg.source_probes.len());
    }

    #[test]
    fn config_toml_partial_fills_defaults() {
        let toml = r#"
            assets_subdir = "custom/models"
            weights_file = "model.onnx"
        "#;
        let cfg: MprepConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.assets_subdir, PathBuf::from("custom/models"));
        assert_eq!(cfg.weights_file, "model.onnx");
        assert_eq!(cfg.thresholds.full_model_bytes, 2_000_000_000);
        assert_eq!(
            cfg.store.weights_media_type,
            "application/vnd.ollama.image.model"
        );
    }

    #[test]
    fn assets_dir_joins_project_root() {
        let cfg = MprepConfig::default();
        let dir = cfg.assets_dir(Path::new("/work/app-repo"));
        assert_eq!(dir, PathBuf::from("/work/app-repo/assets/models"));
    }
}
