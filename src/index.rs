//! The search index container: parsing, serialization and loading.
//!
//! A documentation generator writes the index as a script that assigns a
//! `{"docs": [...]}` object to one global binding:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"","page":"Home","title":"Home","text":"","category":"page"}]
//! }
//! ```
//!
//! [`SearchIndex::parse`] also accepts the bare JSON object and the bare entry
//! array so that indices converted with [`SearchIndex::to_json`] load back.

use crate::entry::{Category, DocEntry};
use crate::error::LoadError;
use ahash::{AHashMap, AHashSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// Binding name the generator assigns the index to.
pub const DEFAULT_BINDING: &str = "documenterSearchIndex";

/// Matches the `var <ident> =` prefix of the script form.
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:var|let|const)\s+(?P<binding>[A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*")
        .expect("assignment pattern is valid")
});

#[derive(Deserialize)]
struct Wrapped {
    docs: Vec<DocEntry>,
}

#[derive(Serialize)]
struct WrappedRef<'a> {
    docs: &'a [DocEntry],
}

/// An ordered, immutable list of documentation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    binding: String,
    docs: Vec<DocEntry>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<DocEntry> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = DocEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a DocEntry;
    type IntoIter = std::slice::Iter<'a, DocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

/// Summary counts for an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub pages: usize,
    /// Non-zero counts in [`Category::ALL`] order
    pub by_category: Vec<(Category, usize)>,
    pub empty_text: usize,
}

impl SearchIndex {
    pub fn new(docs: Vec<DocEntry>) -> Self {
        Self::with_binding(DEFAULT_BINDING, docs)
    }

    pub fn with_binding(binding: impl Into<String>, docs: Vec<DocEntry>) -> Self {
        Self {
            binding: binding.into(),
            docs,
        }
    }

    /// Parse the script form, the bare `{"docs": [...]}` object, or a bare entry array.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let (binding, payload) = match ASSIGNMENT.captures(source) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                let binding = caps
                    .name("binding")
                    .map_or(DEFAULT_BINDING, |m| m.as_str());
                (binding, &source[whole..])
            }
            None => (DEFAULT_BINDING, source),
        };

        let payload = payload.trim();
        let payload = payload.strip_suffix(';').unwrap_or(payload).trim_end();

        let docs = match payload.chars().next() {
            Some('{') => serde_json::from_str::<Wrapped>(payload)?.docs,
            Some('[') => serde_json::from_str::<Vec<DocEntry>>(payload)?,
            _ => return Err(LoadError::MissingPayload),
        };

        tracing::debug!("Parsed {} entries bound to '{}'", docs.len(), binding);
        Ok(Self::with_binding(binding, docs))
    }

    /// Load an index file asynchronously.
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| io_error(path, source))?;
        let index = Self::parse(&source)?;
        tracing::info!("Loaded {} entries from {}", index.len(), path.display());
        Ok(index)
    }

    /// Load an index file from a synchronous context.
    pub fn load_blocking(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
        let index = Self::parse(&source)?;
        tracing::info!("Loaded {} entries from {}", index.len(), path.display());
        Ok(index)
    }

    /// Serialize in the generator's script layout.
    pub fn to_js(&self) -> serde_json::Result<String> {
        let docs = serde_json::to_string(&self.docs)?;
        Ok(format!("var {} = {{\"docs\":\n{}\n}}\n", self.binding, docs))
    }

    /// Serialize as a compact `{"docs": [...]}` object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&WrappedRef { docs: &self.docs })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&WrappedRef { docs: &self.docs })
    }

    pub fn binding(&self) -> &str {
        &self.binding
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.docs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocEntry> {
        self.docs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DocEntry> {
        self.docs.get(index)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Distinct page names in navigation order.
    pub fn pages(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.docs
            .iter()
            .map(|entry| entry.page.as_str())
            .filter(|page| seen.insert(*page))
            .collect()
    }

    /// Non-zero per-category counts in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: AHashMap<Category, usize> = AHashMap::new();
        for entry in &self.docs {
            *counts.entry(entry.category).or_insert(0) += 1;
        }

        Category::ALL
            .into_iter()
            .filter_map(|category| counts.get(&category).map(|&count| (category, count)))
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.docs.len(),
            pages: self.pages().len(),
            by_category: self.category_counts(),
            empty_text: self.docs.iter().filter(|e| e.body().is_empty()).count(),
        }
    }
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    if source.kind() == std::io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
