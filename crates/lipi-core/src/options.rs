/// Per-call transliteration switches. Part of the map cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Copy `<...>` tags through unchanged when reading a roman scheme.
    pub skip_sgml: bool,
    /// Drop the word-final virama when writing a Brahmic scheme.
    pub syncope: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_sgml(mut self, skip_sgml: bool) -> Self {
        self.skip_sgml = skip_sgml;
        self
    }

    pub fn with_syncope(mut self, syncope: bool) -> Self {
        self.syncope = syncope;
        self
    }
}
