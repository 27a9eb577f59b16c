//! `mprep verify` – classify the asset bundle and report integration status.

use anyhow::Result;
use mprep_core::config::MprepConfig;
use mprep_core::verify::{self, SourceStatus};
use std::path::Path;

use super::{gib, mib};

pub fn run_verify(cfg: &MprepConfig, project_root: &Path) -> Result<()> {
    let report = verify::run_verify(cfg, project_root);

    println!("Model asset verification");
    println!("Assets directory: {}", report.assets_dir.display());
    if !report.assets_dir_exists {
        println!("  (directory does not exist)");
    }

    println!();
    for asset in &report.assets {
        let size = asset
            .bytes
            .map(|bytes| format!("{:.1} MiB", mib(bytes)))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} {:>12}  {} - {}",
            asset.status.label(),
            size,
            asset.name,
            asset.description
        );
    }
    println!("Total assets size: {:.2} GiB", gib(report.total_bytes));

    println!();
    println!("Code integration status (informational):");
    for source in &report.sources {
        print_source(source);
    }
    print_source(&report.build);

    if report.pass {
        println!();
        println!("Integration looks complete.");
        Ok(())
    } else {
        anyhow::bail!(
            "integration incomplete: {} present, {} bytes total (floor {} bytes)",
            report
                .assets
                .iter()
                .filter(|a| a.status.is_present())
                .count(),
            report.total_bytes,
            cfg.thresholds.min_total_bytes
        )
    }
}

fn print_source(source: &SourceStatus) {
    let mark = if source.exists { "found  " } else { "missing" };
    println!("  {mark}  {}", source.path);
    for marker in &source.markers {
        let mark = if marker.found { "found  " } else { "missing" };
        println!("    {mark}  marker {:?}", marker.marker);
    }
}
