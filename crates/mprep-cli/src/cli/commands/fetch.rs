//! `mprep fetch` – download the asset table into the assets directory.

use anyhow::Result;
use mprep_core::config::MprepConfig;
use mprep_core::fetch;
use std::path::Path;

use super::gib;

pub fn run_fetch(cfg: &MprepConfig, project_root: &Path) -> Result<()> {
    println!(
        "Downloading model assets to {}",
        cfg.assets_dir(project_root).display()
    );

    let report = fetch::run_fetch(cfg, project_root)?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(bytes) => println!("  ok      {} ({} bytes)", outcome.name, bytes),
            Err(err) => println!("  failed  {}: {}", outcome.name, err),
        }
    }

    println!();
    println!("Assets directory after the batch:");
    for file in &report.files {
        match file.bytes {
            Some(bytes) => println!("  {:>14}  {}", bytes, file.name),
            None => println!("  {:>14}  {}", "missing", file.name),
        }
    }
    println!("Total asset size: {:.2} GiB", gib(report.total_bytes));

    let failures = report.failures();
    if !failures.is_empty() {
        println!();
        println!("Manual download required for the failed files:");
        for outcome in &failures {
            println!("  {}  <-  {}", outcome.name, outcome.url);
        }
    }

    if report.looks_complete {
        println!("Model assets look complete.");
        Ok(())
    } else {
        anyhow::bail!(
            "model assets incomplete: {} bytes total, need more than {} bytes",
            report.total_bytes,
            cfg.thresholds.batch_complete_bytes
        )
    }
}
