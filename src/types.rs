//! Ordered, key-unique containers for translations.
//!
//! Output ordering follows insertion order everywhere, so both containers are
//! backed by a `Vec`. [`TranslationMap`] keeps a key index beside it; a
//! catalog holds few locales, so [`LocaleCatalog`] just scans.

use std::{collections::HashMap, fmt::Display};

/// A single key-value pair destined for a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The translation key.
    pub key: String,
    /// The translated text.
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Pair {
    fn from((key, value): (K, V)) -> Self {
        Pair::new(key, value)
    }
}

/// Translation key to translated text, for one locale.
///
/// Keys are unique; re-inserting a key overwrites its value in place.
/// Insertion and lookup are O(1) on average.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    pairs: Vec<Pair>,
    index: HashMap<String, usize>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a translation, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.pairs[position].value, value)),
            None => {
                self.index.insert(key.clone(), self.pairs.len());
                self.pairs.push(Pair { key, value });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.pairs[position].value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.key.as_str())
    }
}

impl<P: Into<Pair>> FromIterator<P> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut map = TranslationMap::new();
        for pair in iter {
            let pair = pair.into();
            map.insert(pair.key, pair.value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a TranslationMap {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Locale identifier (e.g. `en`, `fr`) to its [`TranslationMap`].
///
/// The first inserted locale is the one picked as default when none is
/// configured explicitly. Lookups are linear in the number of locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleCatalog {
    locales: Vec<(String, TranslationMap)>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a locale, replacing (in place) any map already stored under `locale`.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        translations: TranslationMap,
    ) -> Option<TranslationMap> {
        let locale = locale.into();
        match self.locales.iter_mut().find(|(id, _)| *id == locale) {
            Some((_, existing)) => Some(std::mem::replace(existing, translations)),
            None => {
                self.locales.push((locale, translations));
                None
            }
        }
    }

    pub fn get(&self, locale: &str) -> Option<&TranslationMap> {
        self.locales
            .iter()
            .find(|(id, _)| id == locale)
            .map(|(_, map)| map)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    /// The first locale in insertion order.
    pub fn first_locale(&self) -> Option<&str> {
        self.locales.first().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationMap)> {
        self.locales.iter().map(|(id, map)| (id.as_str(), map))
    }
}

impl<L: Into<String>> FromIterator<(L, TranslationMap)> for LocaleCatalog {
    fn from_iter<I: IntoIterator<Item = (L, TranslationMap)>>(iter: I) -> Self {
        let mut catalog = LocaleCatalog::new();
        for (locale, map) in iter {
            catalog.insert(locale, map);
        }
        catalog
    }
}
