#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reserved bucket keys and canonical metadata fields.
pub mod constants;
/// Metadata key helpers.
pub mod metadata;
/// Type resolution strategies and precedence.
pub mod resolver;
/// Batch routing into per-type buckets.
pub mod router;
/// Source variants and byte stream payloads.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use constants::routing::UNCLASSIFIED_BUCKET;
pub use errors::RouterError;
pub use metadata::{MetadataKey, META_CONTENT_TYPE};
pub use resolver::{ExtensionStrategy, MetadataStrategy, ResolverStrategy, TypeResolver};
pub use router::{BucketMap, Router};
pub use source::{ByteStream, Source, SourceValue};
pub use types::{BucketKey, MetaMap, MimeType};
