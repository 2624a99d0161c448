//! Transliteration engine.
//!
//! A [`Transliterator`] owns a finished [`SchemeRegistry`] and a [`MapCache`].
//! Each call resolves both schemes, fetches (or compiles) the translation map
//! for the pair and options, applies the source scheme's preprocessor, and
//! runs the roman or Brahmic scanner depending on the source kind.

mod brahmic;
mod cache;
mod map;
mod preprocess;
mod roman;

#[cfg(test)]
mod testutil;
#[cfg(test)]
mod tests;

pub use cache::MapCache;
pub use map::{compile, TranslationMap};
pub use preprocess::Preprocessor;

use std::sync::Arc;

use tracing::debug_span;

use crate::detect::detect_scheme;
use crate::options::Options;
use crate::scheme::{parse_schemes_toml, SchemeConfigError, SchemeEntry, SchemeRegistry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}

/// Converts text between registered schemes.
///
/// The registry is fixed at construction; compiled maps are cached per
/// (from, to, options) and shared across threads.
#[derive(Debug)]
pub struct Transliterator {
    registry: SchemeRegistry,
    cache: MapCache,
}

impl Transliterator {
    pub fn new(registry: SchemeRegistry) -> Self {
        Self {
            registry,
            cache: MapCache::new(),
        }
    }

    /// Build an engine from a scheme table in TOML.
    pub fn from_toml(content: &str) -> Result<Self, SchemeConfigError> {
        parse_schemes_toml(content).map(Self::new)
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &MapCache {
        &self.cache
    }

    /// False for Brahmic and for unknown names.
    pub fn is_roman_scheme(&self, name: &str) -> bool {
        self.registry.is_roman_scheme(name)
    }

    /// The compiled map for `from` to `to`, from the cache when possible.
    pub fn translation_map(
        &self,
        from: &str,
        to: &str,
        options: Options,
    ) -> Result<Arc<TranslationMap>, TransliterateError> {
        let source = self.entry(from)?;
        let target = self.entry(to)?;
        Ok(self.cache.get_or_compile(from, to, options, || {
            let _span = debug_span!("compile_map", from, to).entered();
            compile(source, target, self.registry.alternates(from))
        }))
    }

    /// Convert `text` from scheme `from` to scheme `to`.
    ///
    /// Unknown scheme names fail before any output is produced. Characters
    /// the source scheme does not know are copied through.
    pub fn transliterate(
        &self,
        text: &str,
        from: &str,
        to: &str,
        options: Options,
    ) -> Result<String, TransliterateError> {
        let _span = debug_span!("transliterate", from, to, len = text.len()).entered();

        let map = self.translation_map(from, to, options)?;
        let preprocessed;
        let text = match self.entry(from)?.preprocessor {
            Some(preprocessor) => {
                preprocessed = preprocessor.apply(text);
                preprocessed.as_str()
            }
            None => text,
        };

        Ok(if map.from_roman() {
            roman::transliterate(text, &map, options)
        } else {
            brahmic::transliterate(text, &map)
        })
    }

    /// Guess the source scheme with [`detect_scheme`], then convert.
    pub fn transliterate_detected(
        &self,
        text: &str,
        to: &str,
        options: Options,
    ) -> Result<String, TransliterateError> {
        self.transliterate(text, detect_scheme(text), to, options)
    }

    fn entry(&self, name: &str) -> Result<&SchemeEntry, TransliterateError> {
        self.registry
            .get(name)
            .ok_or_else(|| TransliterateError::UnknownScheme(name.to_string()))
    }
}
