//! Scheme data model.
//!
//! A [`Scheme`] maps each [`Group`] to an ordered list of glyphs. Groups are
//! positional: index `i` of a group names the same phoneme in every scheme
//! that declares the group, which is what lets the map compiler pair glyphs
//! across schemes. The registry enforces matching group lengths.

pub mod config;
pub mod registry;
pub mod table;

pub use config::{parse_schemes_toml, read_schemes_file, SchemeConfigError};
pub use registry::{AlternateTable, SchemeEntry, SchemeRegistry};
pub use table::{default_toml, DEFAULT_TOML};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named glyph category within a scheme.
///
/// The declaration order is the order in which the map compiler visits
/// groups, so an earlier group wins when two groups share a source token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Vowels,
    VowelMarks,
    OtherMarks,
    Virama,
    Consonants,
    Symbols,
    Other,
    Zwj,
    Skip,
    Accent,
    ComboAccent,
    Candra,
}

impl Group {
    pub const ALL: [Group; 12] = [
        Group::Vowels,
        Group::VowelMarks,
        Group::OtherMarks,
        Group::Virama,
        Group::Consonants,
        Group::Symbols,
        Group::Other,
        Group::Zwj,
        Group::Skip,
        Group::Accent,
        Group::ComboAccent,
        Group::Candra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::Vowels => "vowels",
            Group::VowelMarks => "vowel_marks",
            Group::OtherMarks => "other_marks",
            Group::Virama => "virama",
            Group::Consonants => "consonants",
            Group::Symbols => "symbols",
            Group::Other => "other",
            Group::Zwj => "zwj",
            Group::Skip => "skip",
            Group::Accent => "accent",
            Group::ComboAccent => "combo_accent",
            Group::Candra => "candra",
        }
    }

    /// Dependent signs: tokens of these groups go to the marks table.
    pub fn is_mark(self) -> bool {
        matches!(self, Group::VowelMarks | Group::Virama)
    }

    /// Tokens of these groups leave a consonant pending in the scanners.
    pub fn is_consonant(self) -> bool {
        matches!(self, Group::Consonants | Group::Other)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Whether a scheme writes syllables (Brahmic) or letters (roman).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    Brahmic,
    Roman,
}

impl SchemeKind {
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Brahmic => "brahmic",
            SchemeKind::Roman => "roman",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A writing system or romanization: group name to positional glyph list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    groups: BTreeMap<Group, Vec<String>>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sets (or replaces) one group.
    pub fn with_group<I, S>(mut self, group: Group, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(group, glyphs.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: drops one group.
    pub fn without_group(mut self, group: Group) -> Self {
        self.groups.remove(&group);
        self
    }

    pub fn group(&self, group: Group) -> Option<&[String]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    pub fn contains(&self, group: Group) -> bool {
        self.groups.contains_key(&group)
    }

    /// Groups in compiler order.
    pub fn groups(&self) -> impl Iterator<Item = (Group, &[String])> {
        self.groups.iter().map(|(g, glyphs)| (*g, glyphs.as_slice()))
    }

    /// Number of declared groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First glyph of a group, or `""` when the group is absent or empty.
    pub fn first(&self, group: Group) -> &str {
        self.group(group)
            .and_then(|g| g.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl FromIterator<(Group, Vec<String>)> for Scheme {
    fn from_iter<T: IntoIterator<Item = (Group, Vec<String>)>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// Copy of `base` with every group present in `overrides` replaced.
pub fn derive_scheme(base: &Scheme, overrides: &Scheme) -> Scheme {
    let mut groups = base.groups.clone();
    for (group, glyphs) in &overrides.groups {
        groups.insert(*group, glyphs.clone());
    }
    Scheme { groups }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemeError {
    #[error("scheme '{name}' declares no groups")]
    EmptyScheme { name: String },
    #[error("scheme '{name}': group '{group}' has {found} glyphs, expected {expected}")]
    MalformedScheme {
        name: String,
        group: Group,
        expected: usize,
        found: usize,
    },
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}
