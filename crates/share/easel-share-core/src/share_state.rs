//! Sparse, shareable subset of an [`EasingState`](crate::EasingState).

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::keys::ShareKey;

/// A source field value: a number or the text form of a named variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShareValue {
    Number(f64),
    Choice(String),
}

impl ShareValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ShareValue::Number(v) => Some(*v),
            ShareValue::Choice(_) => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ShareValue::Choice(s) => Some(s),
            ShareValue::Number(_) => None,
        }
    }
}

impl From<f64> for ShareValue {
    fn from(v: f64) -> Self {
        ShareValue::Number(v)
    }
}

impl From<&str> for ShareValue {
    fn from(s: &str) -> Self {
        ShareValue::Choice(s.to_string())
    }
}

impl fmt::Display for ShareValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareValue::Number(v) => write!(f, "{v}"),
            ShareValue::Choice(s) => f.write_str(s),
        }
    }
}

/// Whitelisted fields keyed by [`ShareKey`], serialised as a flat object with
/// long keys: `{ "easingType": "BEZIER", "bezierX1": 0.25 }`.
///
/// Equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareState(IndexMap<ShareKey, ShareValue>);

impl ShareState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ShareKey, value: impl Into<ShareValue>) -> Option<ShareValue> {
        self.0.insert(key, value.into())
    }

    pub fn get(&self, key: ShareKey) -> Option<&ShareValue> {
        self.0.get(&key)
    }

    pub fn remove(&mut self, key: ShareKey) -> Option<ShareValue> {
        self.0.shift_remove(&key)
    }

    pub fn contains_key(&self, key: ShareKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ShareKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShareKey, &ShareValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ShareKey, ShareValue)> for ShareState {
    fn from_iter<I: IntoIterator<Item = (ShareKey, ShareValue)>>(iter: I) -> Self {
        ShareState(iter.into_iter().collect())
    }
}
