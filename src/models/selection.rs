use std::collections::BTreeSet;

/// The set of AOIs currently active for charting.
///
/// Starts containing every configured AOI. Checkbox toggles and map-marker
/// clicks both funnel through `toggle`, which keeps the two surfaces in
/// sync. An empty selection is valid; the chart shows a placeholder then.
/// Not persisted across a reload cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    active: BTreeSet<String>,
}

impl SelectionSet {
    /// Selection with every given AOI active (the startup default).
    pub fn all(keys: &[String]) -> Self {
        Self {
            active: keys.iter().cloned().collect(),
        }
    }

    /// Remove the key if present, add it otherwise.
    pub fn toggle(&mut self, key: &str) {
        if !self.active.remove(key) {
            self.active.insert(key.to_string());
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Selected keys filtered through a canonical ordering, so dataset and
    /// color assignment stay deterministic regardless of toggle history.
    pub fn selected_in_order(&self, order: &[String]) -> Vec<String> {
        order
            .iter()
            .filter(|key| self.is_selected(key))
            .cloned()
            .collect()
    }
}
