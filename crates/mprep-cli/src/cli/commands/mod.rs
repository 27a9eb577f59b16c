//! CLI command handlers. Each command is in its own file.

mod checksum;
mod extract;
mod fetch;
mod verify;

pub use checksum::run_checksum;
pub use extract::run_extract;
pub use fetch::run_fetch;
pub use verify::run_verify;

/// Bytes as binary mebibytes.
pub(crate) fn mib(bytes: u64) -> f64 {
    bytes as f64 / 1_048_576.0
}

/// Bytes as binary gibibytes.
pub(crate) fn gib(bytes: u64) -> f64 {
    bytes as f64 / 1_073_741_824.0
}
