use crate::cast::CastDescriptor;
use crate::error::{ShapeError, ShapeResult};
use crate::rules::RuleSpec;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Property-keyed map that keeps insertion order.
///
/// Rendering order follows declaration order, so a sorted map is not an
/// option here.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> ShapeMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace; a replaced entry keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<T>) -> Self {
        self.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ShapeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for ShapeMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = ShapeMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T> IntoIterator for ShapeMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ShapeMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShapeMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ShapeMapVisitor<T> {
            type Value = ShapeMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by property name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ShapeMap::new();
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ShapeMapVisitor(PhantomData))
    }
}

pub type CastMap = ShapeMap<CastDescriptor>;
pub type RuleMap = ShapeMap<RuleSpec>;
/// Only key presence matters to the exporter; values are kept for display
pub type DefaultMap = ShapeMap<serde_json::Value>;

/// Capability every DTO instance exposes so its shape can be read without
/// reflection. Accessors a DTO does not provide report `NotProvided`.
pub trait DtoShape {
    fn casts(&self) -> ShapeResult<CastMap> {
        Err(ShapeError::NotProvided("casts"))
    }

    fn rules(&self) -> ShapeResult<RuleMap> {
        Err(ShapeError::NotProvided("rules"))
    }

    fn defaults(&self) -> ShapeResult<DefaultMap> {
        Err(ShapeError::NotProvided("defaults"))
    }
}

/// The three maps read from one DTO instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeMaps {
    pub casts: CastMap,
    pub rules: RuleMap,
    pub defaults: DefaultMap,
}

impl ShapeMaps {
    /// Every property name, first appearance across casts, then rules,
    /// then defaults
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self
            .casts
            .keys()
            .chain(self.rules.keys())
            .chain(self.defaults.keys())
        {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

/// Shape backed by fixed maps; `None` means the accessor is absent
#[derive(Debug, Clone, Default)]
pub struct StaticShape {
    pub casts: Option<CastMap>,
    pub rules: Option<RuleMap>,
    pub defaults: Option<DefaultMap>,
}

impl DtoShape for StaticShape {
    fn casts(&self) -> ShapeResult<CastMap> {
        self.casts.clone().ok_or(ShapeError::NotProvided("casts"))
    }

    fn rules(&self) -> ShapeResult<RuleMap> {
        self.rules.clone().ok_or(ShapeError::NotProvided("rules"))
    }

    fn defaults(&self) -> ShapeResult<DefaultMap> {
        self.defaults
            .clone()
            .ok_or(ShapeError::NotProvided("defaults"))
    }
}
