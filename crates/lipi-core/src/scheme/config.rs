//! Scheme tables loaded from TOML.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use super::{derive_scheme, Group, Scheme, SchemeError, SchemeKind, SchemeRegistry};
use crate::converter::Preprocessor;

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scheme table defines no schemes")]
    Empty,
    #[error("scheme '{0}' has neither a kind nor a base")]
    MissingKind(String),
    #[error("unknown group '{group}' in scheme '{scheme}'")]
    UnknownGroup { scheme: String, group: String },
    #[error("scheme '{name}' derives from unknown scheme '{base}'")]
    UnknownBase { name: String, base: String },
    #[error("alternates declared for unknown scheme '{0}'")]
    UnknownAlternates(String),
    #[error(transparent)]
    Scheme(#[from] SchemeError),
    #[error("scheme table already initialized")]
    AlreadyInitialized,
}

#[derive(Deserialize)]
struct SchemesFile {
    #[serde(default)]
    schemes: BTreeMap<String, SchemeDef>,
    #[serde(default)]
    alternates: BTreeMap<String, HashMap<String, Vec<String>>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemeDef {
    kind: Option<SchemeKind>,
    base: Option<String>,
    preprocess: Option<Preprocessor>,
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
}

struct Derived {
    name: String,
    base: String,
    kind: Option<SchemeKind>,
    preprocess: Option<Preprocessor>,
    overrides: Scheme,
}

/// Parse and validate a scheme table.
///
/// Derived schemes are registered after their bases regardless of file
/// order. A base's alternates are in place before its derived schemes are
/// registered, so they are inherited unless the derived scheme has its own.
pub fn parse_schemes_toml(content: &str) -> Result<SchemeRegistry, SchemeConfigError> {
    let file: SchemesFile =
        toml::from_str(content).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;
    if file.schemes.is_empty() {
        return Err(SchemeConfigError::Empty);
    }

    let mut registry = SchemeRegistry::new();
    let mut pending = Vec::new();
    for (name, def) in file.schemes {
        let scheme = parse_groups(&name, def.groups)?;
        match def.base {
            Some(base) => pending.push(Derived {
                name,
                base,
                kind: def.kind,
                preprocess: def.preprocess,
                overrides: scheme,
            }),
            None => {
                match def.kind {
                    Some(SchemeKind::Brahmic) => registry.register_brahmic(name.as_str(), scheme)?,
                    Some(SchemeKind::Roman) => registry.register_roman(name.as_str(), scheme)?,
                    None => return Err(SchemeConfigError::MissingKind(name)),
                }
                registry.set_preprocessor(&name, def.preprocess)?;
            }
        }
    }

    let mut alternates = file.alternates;
    let ready: Vec<String> = alternates
        .keys()
        .filter(|name| registry.get(name).is_some())
        .cloned()
        .collect();
    for name in ready {
        if let Some(table) = alternates.remove(&name) {
            registry.register_alternates(name, table);
        }
    }

    while !pending.is_empty() {
        let before = pending.len();
        let mut deferred = Vec::new();
        for derived in pending {
            if registry.get(&derived.base).is_some() {
                register_derived(&mut registry, derived)?;
            } else {
                deferred.push(derived);
            }
        }
        if deferred.len() == before {
            let stuck = &deferred[0];
            return Err(SchemeConfigError::UnknownBase {
                name: stuck.name.clone(),
                base: stuck.base.clone(),
            });
        }
        pending = deferred;
    }

    for (name, table) in alternates {
        if registry.get(&name).is_none() {
            return Err(SchemeConfigError::UnknownAlternates(name));
        }
        registry.register_alternates(name, table);
    }

    Ok(registry)
}

/// Read and validate a scheme table from disk.
pub fn read_schemes_file(path: &Path) -> Result<SchemeRegistry, SchemeConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_schemes_toml(&content)
}

fn parse_groups(
    name: &str,
    groups: BTreeMap<String, Vec<String>>,
) -> Result<Scheme, SchemeConfigError> {
    groups
        .into_iter()
        .map(|(group, glyphs)| {
            let group = group
                .parse::<Group>()
                .map_err(|group| SchemeConfigError::UnknownGroup {
                    scheme: name.to_string(),
                    group,
                })?;
            Ok((group, glyphs))
        })
        .collect()
}

fn register_derived(
    registry: &mut SchemeRegistry,
    derived: Derived,
) -> Result<(), SchemeConfigError> {
    let Derived {
        name,
        base,
        kind,
        preprocess,
        overrides,
    } = derived;

    let base_kind = registry.kind(&base);
    match kind {
        // a derived scheme that changes kind is registered as a fresh scheme
        Some(kind) if Some(kind) != base_kind => {
            let scheme = match registry.get(&base) {
                Some(entry) => derive_scheme(&entry.scheme, &overrides),
                None => return Err(SchemeError::UnknownScheme(base).into()),
            };
            match kind {
                SchemeKind::Brahmic => registry.register_brahmic(name.as_str(), scheme)?,
                SchemeKind::Roman => registry
                    .register_roman(name.as_str(), scheme.without_group(Group::VowelMarks))?,
            }
        }
        _ => registry.register_derived(name.as_str(), &base, &overrides)?,
    }
    if preprocess.is_some() {
        registry.set_preprocessor(&name, preprocess)?;
    }
    Ok(())
}
