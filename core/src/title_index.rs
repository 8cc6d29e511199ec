use crate::Item;
use std::collections::HashMap;

/// Index key for a catalog title: lowercased, whitespace kept as stored.
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase()
}

/// Normalized title to item index. The first occurrence of a title wins;
/// later duplicates stay in the item list but cannot be looked up by name.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    map: HashMap<String, usize>,
    duplicates: usize,
}

impl TitleIndex {
    pub fn build(items: &[Item]) -> Self {
        let mut map: HashMap<String, usize> = HashMap::with_capacity(items.len());
        let mut duplicates = 0;
        for (idx, item) in items.iter().enumerate() {
            let key = normalize_title(&item.title);
            if let Some(&first) = map.get(&key) {
                duplicates += 1;
                tracing::debug!(title = %item.title, first, dropped = idx, "duplicate title");
                continue;
            }
            map.insert(key, idx);
        }
        Self { map, duplicates }
    }

    /// Queries are trimmed before lookup; a query that only matches with its
    /// padding intact still resolves.
    pub fn get(&self, title: &str) -> Option<usize> {
        self.map
            .get(&normalize_title(title.trim()))
            .or_else(|| self.map.get(&normalize_title(title)))
            .copied()
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Number of items shadowed by an earlier item with the same title.
    pub fn duplicates(&self) -> usize { self.duplicates }
}
