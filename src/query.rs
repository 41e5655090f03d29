//! Filtering and title lookup over a loaded index.
//!
//! Lookups only ever look at titles and anchors. Documentation text is never
//! tokenized.

use crate::entry::{Category, DocEntry};
use crate::index::SearchIndex;
use ahash::AHashSet;
use rapidfuzz::distance::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a title to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Conjunctive filter over entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub category: Option<Category>,
    pub page: Option<String>,
    pub title_prefix: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    #[must_use]
    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = Some(prefix.into());
        self
    }

    pub fn matches(&self, entry: &DocEntry) -> bool {
        self.category.is_none_or(|category| entry.category == category)
            && self.page.as_deref().is_none_or(|page| entry.page == page)
            && self
                .title_prefix
                .as_deref()
                .is_none_or(|prefix| entry.title.starts_with(prefix))
    }

    /// Matching entries in index order.
    pub fn apply<'a>(&self, index: &'a SearchIndex) -> Vec<&'a DocEntry> {
        index.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// An entry matched by [`find`], with its position in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub position: usize,
    pub entry: &'a DocEntry,
    pub relevance: u32,
}

/// Score how well a title matches a lowercase query.
///
/// - 100: exact title
/// - 90: exact last segment (`validate` for `AxisSets.validate`)
/// - 50: title or last segment starts with the query
/// - 10: title contains the query
pub fn title_relevance(title: &str, query: &str) -> Option<u32> {
    let title = title.to_lowercase();
    let last = title.rsplit_once('.').map_or(title.as_str(), |(_, name)| name);

    if title == query {
        Some(100)
    } else if last == query {
        Some(90)
    } else if title.starts_with(query) || last.starts_with(query) {
        Some(50)
    } else if title.contains(query) {
        Some(10)
    } else {
        None
    }
}

/// Ranked, case-insensitive title lookup. Ties keep index order.
pub fn find<'a>(index: &'a SearchIndex, query: &str, limit: usize) -> Vec<Match<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![];
    }

    let mut matches: Vec<Match<'a>> = index
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            title_relevance(&entry.title, &query).map(|relevance| Match {
                position,
                entry,
                relevance,
            })
        })
        .collect();

    // Stable sort keeps navigation order within a relevance tier.
    matches.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    matches.truncate(limit);

    tracing::debug!("Lookup '{}' matched {} entries", query, matches.len());
    matches
}

/// Titles similar to the query, best first. Used when [`find`] comes back empty.
pub fn suggest<'a>(index: &'a SearchIndex, query: &str, limit: usize) -> Vec<(&'a str, f64)> {
    let query = query.trim().to_lowercase();
    let mut seen = AHashSet::new();

    let mut suggestions: Vec<(&'a str, f64)> = index
        .iter()
        .map(|entry| entry.title.as_str())
        .filter(|title| seen.insert(*title))
        .filter_map(|title| {
            let lower = title.to_lowercase();
            let last = lower.rsplit_once('.').map_or(lower.as_str(), |(_, name)| name);
            let score = jaro_winkler::similarity(query.chars(), lower.chars())
                .max(jaro_winkler::similarity(query.chars(), last.chars()));
            (score > SUGGESTION_THRESHOLD).then_some((title, score))
        })
        .collect();

    suggestions.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    suggestions.truncate(limit);
    suggestions
}

/// Entries grouped by page, both in navigation order.
pub fn group_by_page(index: &SearchIndex) -> Vec<(&str, Vec<&DocEntry>)> {
    let mut groups: Vec<(&str, Vec<&DocEntry>)> = Vec::new();
    for entry in index {
        match groups.iter_mut().find(|(page, _)| *page == entry.page) {
            Some((_, entries)) => entries.push(entry),
            None => groups.push((entry.page.as_str(), vec![entry])),
        }
    }
    groups
}
