// File: crates/chart-layout/src/string_map.rs
// Summary: Ordinal encoding of categorical values so numeric scales can place them.

use std::collections::HashMap;

use crate::chart::ChartProps;
use crate::domain::string_map_for;
use crate::node::ChartNode;
use crate::types::Axis;

/// String to 1-based ordinal, in first-seen order.
/// Contract: ordinals are unique and dense, `1..=len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringMap {
    names: Vec<String>,
    ordinals: HashMap<String, usize>,
}

impl StringMap {
    /// Build a map from strings in encounter order; repeats keep their first ordinal.
    /// Returns `None` when there is nothing to map.
    pub fn from_strings<S: Into<String>>(strings: impl IntoIterator<Item = S>) -> Option<Self> {
        let mut map = Self::default();
        for s in strings {
            map.insert(s.into());
        }
        map.non_empty()
    }

    /// Append `name` unless it is already mapped; returns its ordinal either way.
    pub fn insert(&mut self, name: String) -> usize {
        if let Some(&ordinal) = self.ordinals.get(&name) {
            return ordinal;
        }
        let ordinal = self.names.len() + 1;
        self.ordinals.insert(name.clone(), ordinal);
        self.names.push(name);
        ordinal
    }

    /// `None` for a map with nothing in it.
    pub fn non_empty(self) -> Option<Self> {
        if self.names.is_empty() { None } else { Some(self) }
    }

    /// Names in ordinal order.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    pub fn name(&self, ordinal: usize) -> Option<&str> {
        ordinal.checked_sub(1).and_then(|i| self.names.get(i)).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Every ordinal, ascending.
    pub fn ordinals(&self) -> impl Iterator<Item = usize> + '_ {
        1..=self.names.len()
    }

    /// `(name, ordinal)` pairs, ascending by ordinal.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (n.as_str(), i + 1))
    }
}

/// Map the categorical values found on data axis `axis` to ordinals; `None` when
/// the axis carries no strings at all.
pub fn create_string_map(props: &ChartProps, axis: Axis, children: &[ChartNode]) -> Option<StringMap> {
    string_map_for(props, axis, children).non_empty()
}
