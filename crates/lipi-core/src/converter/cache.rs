use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::TranslationMap;
use crate::options::Options;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MapKey {
    from: String,
    to: String,
    options: Options,
}

/// Compiled maps keyed by (from, to, options).
///
/// Read-mostly: lookups take the read lock, and a miss compiles outside any
/// lock. Two threads racing on the same miss may both compile; the first
/// insert is kept and both receive it.
#[derive(Debug, Default)]
pub struct MapCache {
    maps: RwLock<HashMap<MapKey, Arc<TranslationMap>>>,
}

impl MapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(
        &self,
        from: &str,
        to: &str,
        options: Options,
        compile: impl FnOnce() -> TranslationMap,
    ) -> Arc<TranslationMap> {
        let key = MapKey {
            from: from.to_string(),
            to: to.to_string(),
            options,
        };
        if let Some(map) = self
            .maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            debug!(from, to, "map cache hit");
            return Arc::clone(map);
        }

        debug!(from, to, "map cache miss");
        let map = Arc::new(compile());
        let mut maps = self.maps.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(maps.entry(key).or_insert(map))
    }

    pub fn len(&self) -> usize {
        self.maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.maps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
