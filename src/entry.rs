//! Documentation entries: the records a search index is made of.

use crate::location::Anchor;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag of an entry.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
    Module,
    Constant,
    Type,
    Function,
    Method,
    Macro,
    Keyword,
}

impl Category {
    /// Every category, in the order used for reporting.
    pub const ALL: [Self; 9] = [
        Self::Page,
        Self::Section,
        Self::Module,
        Self::Constant,
        Self::Type,
        Self::Function,
        Self::Method,
        Self::Macro,
        Self::Keyword,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Module => "module",
            Self::Constant => "constant",
            Self::Type => "type",
            Self::Function => "function",
            Self::Method => "method",
            Self::Macro => "macro",
            Self::Keyword => "keyword",
        }
    }

    /// Pages and sections are site structure; everything else documents a symbol.
    pub const fn is_api_item(self) -> bool {
        !matches!(self, Self::Page | Self::Section)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: page, section, module, constant, type, function, method, macro, keyword)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lower)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// One record in the search index.
///
/// All five keys are required on the wire; `text` is the only field that is
/// routinely empty (section headings and bare page entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// URL fragment of the section, e.g. `#AxisSets.validate-Tuple{AxisSets.Dataset}`
    pub location: String,
    /// Display name of the page the entry lives on
    pub page: String,
    /// Display name of the entry (symbol, type, method or heading)
    pub title: String,
    /// Rendered documentation text
    pub text: String,
    pub category: Category,
}

impl DocEntry {
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            text: text.into(),
            category,
        }
    }

    /// The text without the blank-line padding the generator appends to docstrings.
    pub fn body(&self) -> &str {
        self.text.trim_end()
    }

    /// First paragraph of the text.
    pub fn summary(&self) -> &str {
        let body = self.body();
        body.split("\n\n").next().unwrap_or(body).trim()
    }

    pub fn anchor(&self) -> Anchor<'_> {
        Anchor::parse(&self.location)
    }

    pub const fn is_api_item(&self) -> bool {
        self.category.is_api_item()
    }
}
