use crate::types::MetaMap;

pub use crate::constants::metadata::META_CONTENT_TYPE;

/// Canonical identifier for metadata fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetadataKey {
    name: &'static str,
}

impl MetadataKey {
    /// Create a metadata key with a canonical static name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Return the raw key name.
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Look up this key in a source metadata map.
    pub fn lookup<'a>(&self, meta: &'a MetaMap) -> Option<&'a str> {
        meta.get(self.name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_key_looks_up_values_by_canonical_name() {
        let mut meta = MetaMap::new();
        meta.insert("content_type".to_string(), "text/plain".to_string());
        meta.insert("origin".to_string(), "upload".to_string());

        assert_eq!(META_CONTENT_TYPE.as_str(), "content_type");
        assert_eq!(META_CONTENT_TYPE.lookup(&meta), Some("text/plain"));

        meta.remove("content_type");
        assert_eq!(META_CONTENT_TYPE.lookup(&meta), None);
    }
}
