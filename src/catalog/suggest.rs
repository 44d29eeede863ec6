use super::VOCABULARY;
use crate::selection::Selection;

pub const MIN_QUERY_CHARS: usize = 2;

pub struct SuggestionIndex {
    entries: &'static [&'static str],
}

impl Default for SuggestionIndex {
    fn default() -> Self {
        Self {
            entries: &VOCABULARY,
        }
    }
}

impl SuggestionIndex {
    pub fn search(&self, query: &str, selected: &Selection) -> Vec<&'static str> {
        let query_lower = query.to_lowercase();
        if query_lower.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        self.entries
            .iter()
            .copied()
            .filter(|entry| entry.to_lowercase().contains(&query_lower))
            .filter(|entry| !selected.contains(entry))
            .collect()
    }
}
