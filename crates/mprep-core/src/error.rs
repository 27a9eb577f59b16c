//! Error taxonomy shared by the three procedures.
//!
//! Fetch failures are per-file and never abort the batch; extractor
//! preconditions are fatal with a clear diagnostic; the verifier never
//! returns errors at all (absence is a classification, not a failure).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MprepError {
    /// Transport-level failure (connect, resolve, timeout, aborted transfer).
    #[error("network: {0}")]
    Network(#[from] curl::Error),

    /// Response completed with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Local I/O failure (create/copy/read/write).
    #[error("filesystem: {0}")]
    FileSystem(#[from] std::io::Error),

    /// A required store, manifest, layer or blob is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store manifest is not valid JSON.
    #[error("manifest parse: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = MprepError::Http(404);
        assert_eq!(e.to_string(), "HTTP 404");

        let e = MprepError::NotFound("blob sha256-abc".to_string());
        assert_eq!(e.to_string(), "not found: blob sha256-abc");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: MprepError = io.into();
        assert!(matches!(e, MprepError::FileSystem(_)));
        assert!(e.to_string().starts_with("filesystem:"));
    }

    #[test]
    fn parse_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: MprepError = err.into();
        assert!(matches!(e, MprepError::Parse(_)));
    }
}
