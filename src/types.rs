/// Canonical media-type identifier in `<category>/<subtype>` form.
/// Examples: `text/plain`, `audio/x-wav`, `image/jpeg`
pub type MimeType = String;
/// Key of an output bucket: a configured mime type or the reserved
/// `unclassified` label.
/// Examples: `text/plain`, `unclassified`
pub type BucketKey = String;
/// Free-form string metadata attached to byte stream sources.
/// Example entry: `content_type` -> `text/markdown`
pub type MetaMap = std::collections::HashMap<String, String>;
