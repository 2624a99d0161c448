//! Scheme registry and per-scheme alternate spellings.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{derive_scheme, Group, Scheme, SchemeError, SchemeKind};
use crate::converter::Preprocessor;

/// Canonical token to its alternate spellings.
pub type AlternateTable = HashMap<String, Vec<String>>;

/// A registered scheme with the attributes the engine needs at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeEntry {
    pub kind: SchemeKind,
    pub scheme: Scheme,
    pub preprocessor: Option<Preprocessor>,
}

impl SchemeEntry {
    pub fn is_roman(&self) -> bool {
        self.kind == SchemeKind::Roman
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, SchemeEntry>,
    alternates: HashMap<String, AlternateTable>,
    /// Glyph count per group, fixed by the first scheme that declares it.
    group_lengths: BTreeMap<Group, usize>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a Brahmic scheme.
    pub fn register_brahmic(
        &mut self,
        name: impl Into<String>,
        scheme: Scheme,
    ) -> Result<(), SchemeError> {
        self.insert(name.into(), SchemeKind::Brahmic, scheme, None)
    }

    /// Registers (or replaces) a roman scheme. Missing `vowel_marks` are
    /// derived from `vowels` minus the inherent first vowel.
    pub fn register_roman(
        &mut self,
        name: impl Into<String>,
        scheme: Scheme,
    ) -> Result<(), SchemeError> {
        self.insert(name.into(), SchemeKind::Roman, with_vowel_marks(scheme), None)
    }

    /// Registers `name` as `base` with `overrides` applied. The new scheme
    /// inherits the base's kind, preprocessor and alternates.
    pub fn register_derived(
        &mut self,
        name: impl Into<String>,
        base: &str,
        overrides: &Scheme,
    ) -> Result<(), SchemeError> {
        let name = name.into();
        let base_entry = self
            .schemes
            .get(base)
            .ok_or_else(|| SchemeError::UnknownScheme(base.to_string()))?;
        let kind = base_entry.kind;
        let preprocessor = base_entry.preprocessor;

        let mut scheme = derive_scheme(&base_entry.scheme, overrides);
        if kind == SchemeKind::Roman
            && overrides.contains(Group::Vowels)
            && !overrides.contains(Group::VowelMarks)
        {
            scheme = with_vowel_marks(scheme.without_group(Group::VowelMarks));
        }

        if !self.alternates.contains_key(&name) {
            if let Some(table) = self.alternates.get(base).cloned() {
                self.alternates.insert(name.clone(), table);
            }
        }
        self.insert(name, kind, scheme, preprocessor)
    }

    /// Attaches a preprocessor to an already registered scheme.
    pub fn set_preprocessor(
        &mut self,
        name: &str,
        preprocessor: Option<Preprocessor>,
    ) -> Result<(), SchemeError> {
        let entry = self
            .schemes
            .get_mut(name)
            .ok_or_else(|| SchemeError::UnknownScheme(name.to_string()))?;
        entry.preprocessor = preprocessor;
        Ok(())
    }

    /// Replaces the alternate table of `name`.
    pub fn register_alternates(&mut self, name: impl Into<String>, table: AlternateTable) {
        self.alternates.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&SchemeEntry> {
        self.schemes.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<SchemeKind> {
        self.schemes.get(name).map(|e| e.kind)
    }

    /// False for Brahmic and for unknown names.
    pub fn is_roman_scheme(&self, name: &str) -> bool {
        self.kind(name) == Some(SchemeKind::Roman)
    }

    pub fn alternates(&self, name: &str) -> Option<&AlternateTable> {
        self.alternates.get(name)
    }

    /// Registered scheme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    fn insert(
        &mut self,
        name: String,
        kind: SchemeKind,
        scheme: Scheme,
        preprocessor: Option<Preprocessor>,
    ) -> Result<(), SchemeError> {
        self.validate(&name, &scheme)?;
        for (group, glyphs) in scheme.groups() {
            self.group_lengths.entry(group).or_insert(glyphs.len());
        }
        debug!(name = %name, %kind, groups = scheme.len(), "scheme registered");
        self.schemes.insert(
            name,
            SchemeEntry {
                kind,
                scheme,
                preprocessor,
            },
        );
        Ok(())
    }

    fn validate(&self, name: &str, scheme: &Scheme) -> Result<(), SchemeError> {
        if scheme.is_empty() {
            return Err(SchemeError::EmptyScheme {
                name: name.to_string(),
            });
        }
        for (group, glyphs) in scheme.groups() {
            if let Some(&expected) = self.group_lengths.get(&group) {
                if glyphs.len() != expected {
                    return Err(SchemeError::MalformedScheme {
                        name: name.to_string(),
                        group,
                        expected,
                        found: glyphs.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn with_vowel_marks(scheme: Scheme) -> Scheme {
    if scheme.contains(Group::VowelMarks) {
        return scheme;
    }
    let marks: Vec<String> = match scheme.group(Group::Vowels) {
        Some(vowels) => vowels.iter().skip(1).cloned().collect(),
        None => return scheme,
    };
    scheme.with_group(Group::VowelMarks, marks)
}
