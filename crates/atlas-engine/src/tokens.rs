//! Ordered label → value maps shared by every scale and component variant.
//!
//! Scale labels carry meaning in their order (`xs` before `sm`, `0.5` before
//! `1`), so a sorted map would scramble them. `TokenMap` keeps insertion
//! order and serializes as a JSON object in that order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::Rgb;

/// Insertion-ordered map from a static label to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMap<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> TokenMap<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build from `(label, value)` pairs. Later duplicates replace earlier
    /// values in place.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, V)>) -> Self {
        let mut map = Self::new();
        for (label, value) in entries {
            map.set(label, value);
        }
        map
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries.iter().find(|(l, _)| *l == label).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut V> {
        self.entries.iter_mut().find(|(l, _)| *l == label).map(|(_, v)| v)
    }

    /// Replace the value for `label` in place, or append it.
    pub fn set(&mut self, label: &'static str, value: V) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> {
        self.entries.iter().map(|(l, v)| (*l, v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for TokenMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for TokenMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

// ─── TokenValue ─────────────────────────────────────────────────────────────

/// A component token: either CSS text or a bare number.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(f64),
}

impl TokenValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serialize_number(*n, serializer),
        }
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u16> for TokenValue {
    fn from(n: u16) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<Size> for TokenValue {
    fn from(s: Size) -> Self {
        Self::Number(s.0)
    }
}

impl From<Rgb> for TokenValue {
    fn from(c: Rgb) -> Self {
        Self::Text(c.to_hex())
    }
}

/// Serialize integral floats as integers (`16`, not `16.0`).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

/// A number that serializes like [`TokenValue::Number`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Size(pub f64);

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round to one decimal place, half up.
#[must_use]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places, half up.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
