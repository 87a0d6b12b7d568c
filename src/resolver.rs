//! Type resolution strategies and their fixed precedence.
//!
//! Ownership model:
//! - `ResolverStrategy` is one signal source (metadata, extension, optional
//!   caller-supplied sniffing) probed for a type candidate.
//! - `TypeResolver` owns the ordered strategy list and returns the first
//!   candidate a strategy produces.

use std::fmt;
use std::path::Path;

use mime_guess::mime::Mime;
use tracing::trace;

use crate::source::Source;
use crate::types::MimeType;

/// One type signal consulted during resolution.
///
/// Strategies run in registration order; the first `Some` wins. A strategy
/// returns `None` when its signal is absent for the source, never an error.
pub trait ResolverStrategy: Send + Sync {
    /// Short label used in resolution traces.
    fn name(&self) -> &'static str;

    /// Probe `source` for its single best type candidate.
    fn probe(&self, source: &Source) -> Option<MimeType>;

    /// All type candidates for `source`, best first.
    ///
    /// Registry-backed strategies can report several synonymous identifiers
    /// for one signal (a `.wav` extension maps to `audio/wav` and
    /// `audio/x-wav`, among others). Defaults to the single `probe`
    /// candidate.
    fn candidates(&self, source: &Source) -> Vec<MimeType> {
        self.probe(source).into_iter().collect()
    }
}

/// Trusts an explicit `content_type` metadata entry verbatim.
///
/// Only byte streams carry metadata; paths never match this strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataStrategy;

impl ResolverStrategy for MetadataStrategy {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn probe(&self, source: &Source) -> Option<MimeType> {
        match source {
            Source::Blob(stream) => stream.content_type().map(str::to_string),
            Source::Path(_) => None,
        }
    }
}

/// Guesses a path's type from its filename extension via the mime registry.
///
/// A path with no extension, or with an extension absent from the registry,
/// yields no candidate. Byte streams never match this strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtensionStrategy;

impl ResolverStrategy for ExtensionStrategy {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn probe(&self, source: &Source) -> Option<MimeType> {
        self.candidates(source).into_iter().next()
    }

    fn candidates(&self, source: &Source) -> Vec<MimeType> {
        match source {
            Source::Path(path) => guess_from_extension(path),
            Source::Blob(_) => Vec::new(),
        }
    }
}

fn guess_from_extension(path: &Path) -> Vec<MimeType> {
    mime_guess::from_path(path)
        .iter_raw()
        .map(str::to_string)
        .collect()
}

/// Resolves one source to its best-guess mime type.
///
/// Default precedence: explicit metadata, then filename extension. Byte
/// streams without a `content_type` entry are not sniffed unless the caller
/// appends a sniffing strategy.
pub struct TypeResolver {
    strategies: Vec<Box<dyn ResolverStrategy>>,
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("TypeResolver")
            .field("strategies", &names)
            .finish()
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeResolver {
    /// Create a resolver with the default strategy order.
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(MetadataStrategy), Box::new(ExtensionStrategy)],
        }
    }

    /// Append a strategy after the defaults, before the unknown fallback
    /// (for example content-signature sniffing for byte streams).
    pub fn with_strategy(mut self, strategy: Box<dyn ResolverStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Best-guess mime type for `source`, or `None` when no signal resolves.
    ///
    /// An unresolvable source is a normal outcome, never an error.
    pub fn resolve(&self, source: &Source) -> Option<MimeType> {
        self.resolve_preferring(source, |_| true)
    }

    /// Best-guess mime type for `source`, preferring candidates accepted by
    /// `prefer` when one signal reports several synonymous identifiers.
    ///
    /// Strategy precedence is unchanged: the first strategy with any
    /// candidate decides, and `prefer` only selects among that strategy's
    /// candidates, falling back to its first candidate when none is
    /// preferred.
    pub fn resolve_preferring<F>(&self, source: &Source, prefer: F) -> Option<MimeType>
    where
        F: Fn(&str) -> bool,
    {
        for strategy in &self.strategies {
            let mut candidates = strategy.candidates(source);
            if candidates.is_empty() {
                continue;
            }
            let picked = candidates
                .iter()
                .position(|candidate| prefer(candidate.as_str()))
                .unwrap_or(0);
            let mime_type = candidates.swap_remove(picked);
            trace!(
                strategy = strategy.name(),
                mime_type = %mime_type,
                "resolved source type"
            );
            return Some(mime_type);
        }
        None
    }

    /// Whether `mime_type` is a well-formed `<category>/<subtype>` identifier.
    ///
    /// Validation is syntactic (the `mime` parser), not registry membership,
    /// so vendor identifiers like `audio/x-wav` are accepted.
    pub fn is_well_formed(mime_type: &str) -> bool {
        mime_type.parse::<Mime>().is_ok()
    }
}
