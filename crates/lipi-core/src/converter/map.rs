use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::scheme::{AlternateTable, Group, SchemeEntry};

/// Compiled lookup tables for one (source, destination) scheme pair.
///
/// Immutable once built; shared between callers through the map cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    letters: HashMap<String, String>,
    marks: HashMap<String, String>,
    consonants: HashSet<String>,
    virama: String,
    bare_vowel: String,
    inherent_vowel: String,
    max_token_length: usize,
    from_roman: bool,
    to_roman: bool,
}

impl TranslationMap {
    /// Destination glyph for a letter-like source token.
    pub fn letter(&self, token: &str) -> Option<&str> {
        self.letters.get(token).map(String::as_str)
    }

    /// Destination glyph for a dependent sign (vowel mark or virama).
    pub fn mark(&self, token: &str) -> Option<&str> {
        self.marks.get(token).map(String::as_str)
    }

    pub fn is_consonant(&self, token: &str) -> bool {
        self.consonants.contains(token)
    }

    /// The destination virama, empty for roman destinations.
    pub fn virama(&self) -> &str {
        &self.virama
    }

    /// Source token of the implicit vowel; a roman source writes nothing
    /// for it after a consonant.
    pub fn bare_vowel(&self) -> &str {
        &self.bare_vowel
    }

    /// Destination spelling of the implicit vowel, written after a bare
    /// Brahmic consonant.
    pub fn inherent_vowel(&self) -> &str {
        &self.inherent_vowel
    }

    /// Longest source token in characters; at least 1.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    pub fn from_roman(&self) -> bool {
        self.from_roman
    }

    pub fn to_roman(&self) -> bool {
        self.to_roman
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }
}

/// Build the translation map from `from` to `to`.
///
/// Groups are paired positionally. A group missing from the destination is
/// skipped, so its source tokens pass through unchanged. Empty source glyphs
/// are never keys; an empty destination glyph is kept (the source token is
/// then deleted). A token repeated within a group takes its last position,
/// so Tamil `க` reads as the aspirated `gha` and Bengali `ব` as `va`. A token
/// shared by two groups keeps the first group in [`Group`] order, so a
/// consonant beats its `other` (nukta) twin.
pub fn compile(
    from: &SchemeEntry,
    to: &SchemeEntry,
    alternates: Option<&AlternateTable>,
) -> TranslationMap {
    let mut letters = HashMap::new();
    let mut marks = HashMap::new();
    let mut consonants = HashSet::new();
    let mut max_token_length = 1;

    for (group, sources) in from.scheme.groups() {
        let Some(targets) = to.scheme.group(group) else {
            debug!(%group, "destination lacks group, tokens pass through");
            continue;
        };
        let mut group_table: HashMap<&String, &String> = HashMap::new();
        for (source, target) in sources.iter().zip(targets) {
            let extra = alternates
                .and_then(|t| t.get(source))
                .map(Vec::as_slice)
                .unwrap_or_default();
            for token in std::iter::once(source).chain(extra) {
                if token.is_empty() {
                    continue;
                }
                max_token_length = max_token_length.max(token.chars().count());
                group_table.insert(token, target);
                if group.is_consonant() {
                    consonants.insert(token.clone());
                }
            }
        }

        let table = if group.is_mark() {
            &mut marks
        } else {
            &mut letters
        };
        for (token, target) in group_table {
            table
                .entry(token.clone())
                .or_insert_with(|| target.clone());
        }
    }

    let map = TranslationMap {
        letters,
        marks,
        consonants,
        virama: to.scheme.first(Group::Virama).to_string(),
        bare_vowel: implicit_vowel(from),
        inherent_vowel: implicit_vowel(to),
        max_token_length,
        from_roman: from.is_roman(),
        to_roman: to.is_roman(),
    };
    debug!(
        max_token_length = map.max_token_length,
        letters = map.letters.len(),
        marks = map.marks.len(),
        "map compiled"
    );
    map
}

fn implicit_vowel(entry: &SchemeEntry) -> String {
    match entry.scheme.first(Group::Vowels) {
        "" => "a".to_string(),
        vowel => vowel.to_string(),
    }
}
