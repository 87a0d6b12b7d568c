use crate::metadata::MetadataKey;

/// Constants used by bucket construction and reserved bucket keys.
pub mod routing {
    /// Reserved bucket key for sources whose type is unknown or not in the
    /// configured allow-list.
    pub const UNCLASSIFIED_BUCKET: &str = "unclassified";
}

/// Constants used by metadata lookup on byte stream sources.
pub mod metadata {
    use super::MetadataKey;

    /// Canonical metadata field carrying an explicit content type
    /// (for example `content_type` -> `audio/x-wav`).
    pub const META_CONTENT_TYPE: MetadataKey = MetadataKey::new("content_type");
}
