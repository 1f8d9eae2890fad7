// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style configuration store

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names of the settings written by this crate
///
/// The store accepts arbitrary keys; these constants cover every key the
/// crate's own entry points write.
pub mod keys {
    pub const FONT_SIZE: &str = "font.size";
    pub const FIGURE_FIGSIZE: &str = "figure.figsize";
    pub const FIGURE_DPI: &str = "figure.dpi";
    pub const LINES_LINEWIDTH: &str = "lines.linewidth";
    pub const TEXT_USETEX: &str = "text.usetex";
    pub const MATHTEXT_FONTSET: &str = "mathtext.fontset";
    pub const FONT_FAMILY: &str = "font.family";
    pub const TEXT_LATEX_PREAMBLE: &str = "text.latex.preamble";
    pub const PGF_TEXSYSTEM: &str = "pgf.texsystem";
    pub const PGF_RCFONTS: &str = "pgf.rcfonts";
    pub const PGF_PREAMBLE: &str = "pgf.preamble";
}

/// A setting value
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A (width, height) pair, used for figure dimensions
    Pair(f64, f64),
}

impl Value {
    /// Get the boolean value, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as `f64`, converting from `Int` where applicable
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(x) => Some(*x as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Get the string value, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the pair value, if this is a `Pair`
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Value::Pair(w, h) => Some((*w, *h)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
impl From<(f64, f64)> for Value {
    fn from((w, h): (f64, f64)) -> Self {
        Value::Pair(w, h)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Pair(w, h) => write!(f, "({w}, {h})"),
        }
    }
}

/// Style configuration store
///
/// A mutable mapping from setting name to [`Value`], read by the plotting
/// library. The original design kept this as process-wide global state; here
/// it is an explicit object constructed by the caller and passed into
/// [`GeneralParams::apply`][crate::GeneralParams::apply] and
/// [`configure`][crate::configure], which only ever write to it.
///
/// Setting a key that is already present overwrites the old value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleStore {
    map: BTreeMap<String, Value>,
}

impl StyleStore {
    /// Construct an empty store
    pub fn new() -> Self {
        StyleStore::default()
    }

    /// Set `key` to `value`, replacing any existing value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(key.into(), value.into());
    }

    /// Get the value of `key`, if set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Get the boolean value of `key`, if set to a `Bool`
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Get the numeric value of `key`, if set to an `Int` or `Float`
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Get the string value of `key`, if set to a `Str`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// True if `key` is set
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no settings are present
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Extend<(String, Value)> for StyleStore {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl IntoIterator for StyleStore {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut store = StyleStore::new();
        store.set(keys::FONT_SIZE, 12.0);
        store.set(keys::FONT_SIZE, 14.0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_f64(keys::FONT_SIZE), Some(14.0));
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(3i64).as_f64(), Some(3.0));
        assert_eq!(Value::from("serif").as_str(), Some("serif"));
        assert_eq!(Value::from((8.0, 6.0)).as_pair(), Some((8.0, 6.0)));
        assert_eq!(Value::from("serif").as_bool(), None);
    }

    #[test]
    fn iter_in_key_order() {
        let mut store = StyleStore::new();
        store.set("b", 2.0);
        store.set("a", 1.0);
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
