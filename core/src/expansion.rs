//! Per-card expand/collapse flags.

use std::collections::HashMap;

use crate::types::Drink;

/// Maps a drink id to whether its card shows the full instructions.
///
/// Rebuilt from scratch whenever a new result set is loaded, so it never
/// holds keys for drinks that are no longer displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    expanded: HashMap<String, bool>,
}

impl ExpansionMap {
    /// All-collapsed map for exactly the given drinks.
    pub fn for_drinks(drinks: &[Drink]) -> Self {
        Self {
            expanded: drinks.iter().map(|d| (d.id.clone(), false)).collect(),
        }
    }

    /// Absent ids read as collapsed.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip one id and return its new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.keys().map(String::as_str)
    }
}
