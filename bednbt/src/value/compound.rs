use std::ops::Index;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::value::check_str_len;
use crate::{Tag, Value};

/// An NBT compound: a mapping of names to values.
///
/// Entries are kept in insertion order, which is the order they are encoded
/// in. Two compounds with the same entries in a different order are equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a compound from `(name, value)` pairs, failing on the first
    /// invalid entry. See [`Compound::insert`].
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let entries = entries.into_iter();
        let mut compound = Self {
            entries: IndexMap::with_capacity(entries.size_hint().0),
        };

        for (key, value) in entries {
            compound.insert(key, value)?;
        }

        Ok(compound)
    }

    /// Add an entry to the end of the compound. Existing entries are never
    /// overwritten: a repeated key is an error, as is an End value or a key
    /// too long to encode.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        check_str_len(&key)?;

        if value.tag() == Tag::End {
            return Err(Error::type_mismatch(format!(
                "compound entry {:?} can not be an End tag",
                key
            )));
        }

        if self.entries.contains_key(&key) {
            return Err(Error::duplicate_key(&key));
        }

        self.entries.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Index<&str> for Compound {
    type Output = Value;

    /// Panics if the key is missing, like `HashMap`.
    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(v) => v,
            None => panic!("compound has no key {:?}", key),
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
