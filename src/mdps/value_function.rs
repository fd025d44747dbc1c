use crate::defs::Continous;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State-value function V(s). Iterates in ascending state order so that sums
/// over it are reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueFunction<S: Ord> {
    values: BTreeMap<S, Continous>,
}

impl<S: Ord + Clone> ValueFunction<S> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn zeros<I: IntoIterator<Item = S>>(states: I) -> Self {
        states.into_iter().map(|s| (s, 0.)).collect()
    }

    pub fn get(&self, s: &S) -> Option<Continous> {
        self.values.get(s).copied()
    }

    pub fn insert(&mut self, s: S, v: Continous) -> Option<Continous> {
        self.values.insert(s, v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, Continous)> {
        self.values.iter().map(|(s, &v)| (s, v))
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn scaled(&self, k: Continous) -> Self {
        self.iter().map(|(s, v)| (s.clone(), k * v)).collect()
    }
}

impl<S: Ord + Clone> Default for ValueFunction<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<(S, Continous)> for ValueFunction<S> {
    fn from_iter<I: IntoIterator<Item = (S, Continous)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
