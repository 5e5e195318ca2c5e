//! Error type for the export pipeline
//!
//! Payload problems are never errors here (they degrade to placeholders);
//! only the serialization step can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

impl From<ExportError> for launchpad_common::Error {
    fn from(err: ExportError) -> Self {
        launchpad_common::Error::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_common_export_error() {
        let err: launchpad_common::Error = ExportError::Serialization("zip".to_string()).into();
        assert_eq!(err.error_code(), "EXPORT_FAILED");
        assert!(err.to_string().contains("zip"));
    }
}
