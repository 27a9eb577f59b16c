//! Asset fetcher: streamed HTTP GET per table entry, failures isolated.
//!
//! Each (name, URL) pair is downloaded independently; one bad URL never
//! blocks the rest of the batch. After all attempts the assets directory is
//! re-scanned and the total size compared against the completeness
//! threshold. Single attempt per file, no resume, no hash verification.

use crate::config::{DownloadSpec, MprepConfig};
use crate::error::MprepError;
use std::cell::{Cell, RefCell};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result of one download attempt: final byte count or the isolated error.
#[derive(Debug)]
pub struct FetchOutcome {
    pub name: String,
    pub url: String,
    pub result: Result<u64, MprepError>,
}

/// One expected file in the post-batch directory scan (None = absent).
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub name: String,
    pub bytes: Option<u64>,
}

/// Batch report: per-file outcomes, final directory scan, completeness.
#[derive(Debug)]
pub struct FetchReport {
    pub assets_dir: PathBuf,
    pub outcomes: Vec<FetchOutcome>,
    pub files: Vec<ScannedFile>,
    pub total_bytes: u64,
    pub looks_complete: bool,
}

impl FetchReport {
    pub fn failures(&self) -> Vec<&FetchOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err()).collect()
    }
}

/// Download every table entry into the assets directory, then re-scan.
/// Only failure to create the directory itself is fatal.
pub fn run_fetch(cfg: &MprepConfig, project_root: &Path) -> Result<FetchReport, MprepError> {
    let assets_dir = cfg.assets_dir(project_root);
    fs::create_dir_all(&assets_dir)?;

    let mut outcomes = Vec::with_capacity(cfg.downloads.len());
    for spec in &cfg.downloads {
        let dest = assets_dir.join(&spec.name);
        tracing::info!(name = %spec.name, url = %spec.url, "downloading");
        let result = fetch_one(&spec.url, &dest);
        match &result {
            Ok(bytes) => tracing::info!(name = %spec.name, bytes, "download complete"),
            Err(err) => tracing::warn!(name = %spec.name, %err, "download failed"),
        }
        outcomes.push(FetchOutcome {
            name: spec.name.clone(),
            url: spec.url.clone(),
            result,
        });
    }

    let files = scan_assets(&assets_dir, &cfg.downloads);
    let total_bytes = dir_total_bytes(&assets_dir);
    let looks_complete = total_bytes > cfg.thresholds.batch_complete_bytes;

    Ok(FetchReport {
        assets_dir,
        outcomes,
        files,
        total_bytes,
        looks_complete,
    })
}

/// Streamed GET of one URL into `dest`. On any failure the partial
/// destination file is removed, so a failed download leaves nothing behind.
pub fn fetch_one(url: &str, dest: &Path) -> Result<u64, MprepError> {
    match stream_to_file(url, dest) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            let _ = fs::remove_file(dest);
            Err(err)
        }
    }
}

fn stream_to_file(url: &str, dest: &Path) -> Result<u64, MprepError> {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut file = File::create(dest)?;

    let written = Cell::new(0u64);
    let content_length = Cell::new(None::<u64>);
    let last_decile = Cell::new(0u64);
    let io_error: RefCell<Option<std::io::Error>> = RefCell::new(None);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|line| {
            if let Ok(s) = std::str::from_utf8(line) {
                if let Some((header, value)) = s.split_once(':') {
                    if header.trim().eq_ignore_ascii_case("content-length") {
                        if let Ok(n) = value.trim().parse::<u64>() {
                            content_length.set(Some(n));
                        }
                    }
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            if let Err(e) = file.write_all(data) {
                *io_error.borrow_mut() = Some(e);
                // Short count aborts the transfer.
                return Ok(0);
            }
            written.set(written.get() + data.len() as u64);
            if let Some(total) = content_length.get() {
                if total > 0 {
                    let decile = written.get() * 10 / total;
                    if decile > last_decile.get() {
                        last_decile.set(decile);
                        tracing::info!(
                            "{}: {}% ({} / {} bytes)",
                            name,
                            decile * 10,
                            written.get(),
                            total
                        );
                    }
                }
            }
            Ok(data.len())
        })?;
        let result = transfer.perform();
        drop(transfer);
        if let Some(e) = io_error.borrow_mut().take() {
            return Err(MprepError::FileSystem(e));
        }
        result?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(MprepError::Http(code));
    }

    Ok(written.get())
}

/// Final size of each expected file in `dir` (None for absent files).
pub fn scan_assets(dir: &Path, specs: &[DownloadSpec]) -> Vec<ScannedFile> {
    specs
        .iter()
        .map(|spec| ScannedFile {
            name: spec.name.clone(),
            bytes: file_len(&dir.join(&spec.name)),
        })
        .collect()
}

/// Sum of the sizes of all regular files directly under `dir`.
/// An unreadable directory counts as empty.
pub fn dir_total_bytes(dir: &Path) -> u64 {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };
    entries
        .flatten()
        .filter_map(|entry| entry.metadata().ok())
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
        .sum()
}

fn file_len(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}
