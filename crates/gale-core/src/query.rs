//! Query string decoding
//!
//! Decodes `key1=val1&key2=val2` fragments into an ordered mapping with
//! percent-decoded keys and values.

use crate::{Error, Result};

/// Decoded query parameters, in first-insertion order.
///
/// Duplicate keys keep their original position; the value is overwritten by
/// the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw query string (the part after `?`).
    ///
    /// Every `&`-separated piece must contain an `=`; a piece without one
    /// yields [`Error::MalformedQuery`]. An empty value (`key=`) is valid.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut params = QueryParams::default();
        for pair in raw.split('&') {
            let (key, value) = pair.split_once('=').ok_or_else(|| Error::MalformedQuery {
                pair: pair.to_string(),
            })?;
            params.insert(decode(key)?, decode(value)?);
        }
        Ok(params)
    }

    /// Insert a pair; an existing key keeps its slot and takes the new value.
    fn insert(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a decoded value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a value, failing with [`Error::MissingParam`] if absent
    pub fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(Error::MissingParam(key))
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs were decoded
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Percent-decode one side of a pair as UTF-8
fn decode(s: &str) -> Result<String> {
    urlencoding::decode(s)
        .map(|cow| cow.into_owned())
        .map_err(|_| Error::MalformedQuery {
            pair: s.to_string(),
        })
}
