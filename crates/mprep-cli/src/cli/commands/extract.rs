//! `mprep extract` – copy the weights blob from a local Ollama store.

use anyhow::{Context, Result};
use mprep_core::config::MprepConfig;
use mprep_core::extract;
use std::path::Path;

use super::gib;

pub fn run_extract(cfg: &MprepConfig, project_root: &Path) -> Result<()> {
    let report = extract::run_extract(cfg, project_root).with_context(|| {
        format!(
            "extracting {}:{} from a local model store",
            cfg.store.model, cfg.store.tag
        )
    })?;

    println!("Store root:  {}", report.store_root.display());
    println!("Blob:        {}", report.blob.display());
    println!("Destination: {}", report.dest.display());
    println!(
        "Copied {:.2} GiB (manifest declared {:.2} GiB)",
        gib(report.bytes),
        gib(report.declared_bytes)
    );
    match report.digest_ok {
        Some(true) => println!("Digest check: ok"),
        Some(false) => println!("Digest check: MISMATCH against the manifest digest"),
        None => println!("Digest check: skipped (digest could not be recomputed)"),
    }
    println!("Note: store blobs are typically GGUF; the app expects ONNX.");
    println!("      Conversion or a separate ONNX download may still be needed.");

    Ok(())
}
