use thiserror::Error;

use crate::types::MimeType;

/// Error type for router configuration and batch input failures.
///
/// A source whose type cannot be resolved is not an error; it routes to the
/// unclassified bucket. Only structurally invalid input fails.
#[derive(Debug, Error)]
pub enum RouterError {
    /// An allow-list entry is not a well-formed media type identifier.
    #[error("Unknown mime type: '{mime_type}'")]
    UnknownMimeType {
        /// The offending allow-list entry, verbatim.
        mime_type: MimeType,
    },
    /// A batch element is neither a filesystem path nor a byte stream.
    #[error("Unsupported data source type: {value} (position {position})")]
    UnsupportedSource {
        /// Zero-based index of the offending element in the input batch.
        position: usize,
        /// Rendering of the offending value.
        value: String,
    },
}
