use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::metadata::META_CONTENT_TYPE;
use crate::types::MetaMap;

/// In-memory byte payload plus optional string metadata.
///
/// The payload is owned and never reinterpreted by the router; the only
/// metadata key consulted during routing is `content_type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteStream {
    /// Owned payload bytes.
    pub data: Vec<u8>,
    /// Free-form string metadata.
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub meta: MetaMap,
}

impl ByteStream {
    /// Create a stream over owned bytes with no metadata.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            meta: MetaMap::new(),
        }
    }

    /// Attach a metadata entry, replacing any existing value for the key.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Explicit content type from metadata, when present.
    pub fn content_type(&self) -> Option<&str> {
        META_CONTENT_TYPE.lookup(&self.meta)
    }
}

/// One routable unit of input: a filesystem path or an in-memory byte stream.
///
/// The enum is closed and matched exhaustively by every resolver strategy and
/// by the router, so adding a third source kind is a compile-time-visible
/// change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Source {
    /// Filesystem path reference. Existence is not checked during routing;
    /// only the filename is consulted.
    Path(PathBuf),
    /// Owned byte payload with optional metadata.
    Blob(ByteStream),
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<ByteStream> for Source {
    fn from(stream: ByteStream) -> Self {
        Source::Blob(stream)
    }
}

/// Loosely typed batch element accepted by `Router::run`.
///
/// Upstream pipelines hand over dynamic payloads; only `Path` and `Blob`
/// values are routable. Anything else fails the whole call, carrying the
/// rejected value in the error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SourceValue {
    /// A routable filesystem path.
    Path(PathBuf),
    /// A routable byte stream.
    Blob(ByteStream),
    /// An arbitrary payload kept verbatim for error reporting.
    Other(serde_json::Value),
}

impl From<PathBuf> for SourceValue {
    fn from(path: PathBuf) -> Self {
        SourceValue::Path(path)
    }
}

impl From<&Path> for SourceValue {
    fn from(path: &Path) -> Self {
        SourceValue::Path(path.to_path_buf())
    }
}

impl From<ByteStream> for SourceValue {
    fn from(stream: ByteStream) -> Self {
        SourceValue::Blob(stream)
    }
}

impl From<Source> for SourceValue {
    fn from(source: Source) -> Self {
        match source {
            Source::Path(path) => SourceValue::Path(path),
            Source::Blob(stream) => SourceValue::Blob(stream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_stream_exposes_content_type_metadata() {
        let stream = ByteStream::new(b"payload".to_vec())
            .with_meta("origin", "upload")
            .with_meta("content_type", "audio/x-wav");
        assert_eq!(stream.content_type(), Some("audio/x-wav"));

        let bare = ByteStream::new(b"payload".to_vec());
        assert_eq!(bare.content_type(), None);
    }

    #[test]
    fn with_meta_replaces_existing_entries() {
        let stream = ByteStream::new(Vec::new())
            .with_meta("content_type", "text/plain")
            .with_meta("content_type", "text/markdown");
        assert_eq!(stream.content_type(), Some("text/markdown"));
        assert_eq!(stream.meta.len(), 1);
    }
}
