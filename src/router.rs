//! Batch routing of sources into per-type buckets.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::constants::routing::UNCLASSIFIED_BUCKET;
use crate::errors::RouterError;
use crate::resolver::TypeResolver;
use crate::source::{Source, SourceValue};
use crate::types::{BucketKey, MimeType};

/// Ordered mapping from bucket key to the sources routed there.
///
/// Keys appear in first-use order during the routing pass; a key is present
/// only when at least one source routed to it.
pub type BucketMap = IndexMap<BucketKey, Vec<Source>>;

/// Routes a batch of sources into buckets keyed by resolved mime type.
///
/// The allow-list is fixed at construction and `run` touches no shared
/// mutable state, so one router can serve concurrent callers.
#[derive(Debug)]
pub struct Router {
    allowed: IndexSet<MimeType>,
    resolver: TypeResolver,
}

impl Router {
    /// Build a router over an ordered allow-list of mime type identifiers.
    ///
    /// Every entry must be a well-formed `<category>/<subtype>` identifier;
    /// the first malformed entry fails construction and no partial router is
    /// produced.
    pub fn new<I, S>(mime_types: I) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<MimeType>,
    {
        let mut allowed = IndexSet::new();
        for mime_type in mime_types {
            let mime_type = mime_type.into();
            if !TypeResolver::is_well_formed(&mime_type) {
                return Err(RouterError::UnknownMimeType { mime_type });
            }
            allowed.insert(mime_type);
        }
        Ok(Self {
            allowed,
            resolver: TypeResolver::new(),
        })
    }

    /// Replace the default resolver, e.g. to add a sniffing strategy.
    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Configured allow-list entries in insertion order.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Partition `sources` into buckets keyed by resolved mime type.
    ///
    /// Every input lands in exactly one bucket and within-bucket order
    /// matches input order. A source resolving to no configured type lands
    /// under `unclassified`. A batch element that is neither a path nor a
    /// byte stream fails the whole call with no partial bucket map; an empty
    /// batch yields an empty map with no keys at all.
    pub fn run<I>(&self, sources: I) -> Result<BucketMap, RouterError>
    where
        I: IntoIterator<Item = SourceValue>,
    {
        let mut buckets = BucketMap::new();
        for (position, value) in sources.into_iter().enumerate() {
            let source = match value {
                SourceValue::Path(path) => Source::Path(path),
                SourceValue::Blob(stream) => Source::Blob(stream),
                SourceValue::Other(other) => {
                    return Err(RouterError::UnsupportedSource {
                        position,
                        value: other.to_string(),
                    });
                }
            };
            // Registry signals can report synonymous identifiers for one
            // extension; prefer the one the allow-list knows.
            let resolved = self
                .resolver
                .resolve_preferring(&source, |mime_type| self.allowed.contains(mime_type));
            let key = match resolved {
                Some(mime_type) if self.allowed.contains(&mime_type) => mime_type,
                _ => UNCLASSIFIED_BUCKET.to_string(),
            };
            debug!(bucket = %key, position, "routed source");
            buckets.entry(key).or_default().push(source);
        }
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_preserves_insertion_order_and_dedupes() {
        let router = Router::new(["text/plain", "image/jpeg", "text/plain"]).unwrap();
        let listed: Vec<&str> = router.mime_types().collect();
        assert_eq!(listed, vec!["text/plain", "image/jpeg"]);
    }

    #[test]
    fn debug_output_names_configured_types() {
        let router = Router::new(["text/plain"]).unwrap();
        let rendered = format!("{router:?}");
        assert!(rendered.contains("text/plain"));
    }

    #[test]
    fn malformed_allow_list_entry_names_the_offender() {
        let err = Router::new(["text/plain", "type_invalid"]).unwrap_err();
        assert!(matches!(err, RouterError::UnknownMimeType { .. }));
        assert!(err.to_string().contains("Unknown mime type: 'type_invalid'"));
    }
}
