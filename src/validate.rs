//! Schema validation for loaded indices.
//!
//! Deserialization already guarantees every key is present and every category
//! is known. This pass checks what the type system cannot: empty required
//! fields and anchors that disagree with their entry.

use crate::entry::{Category, DocEntry};
use crate::error::ValidationError;
use crate::index::SearchIndex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field is empty.
    EmptyField(&'static str),
    /// A non-page entry has no location to link to.
    EmptyLocation,
    /// The location carries a method signature but the entry is not a method.
    DanglingSignature { signature: String },
    /// The anchor names a different symbol than the title.
    TitleMismatch { symbol: String },
    /// The index has no entries at all.
    EmptyIndex,
}

impl IssueKind {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyField(_) | Self::EmptyLocation => Severity::Error,
            Self::DanglingSignature { .. } | Self::TitleMismatch { .. } | Self::EmptyIndex => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field '{}' is empty", field),
            Self::EmptyLocation => f.write_str("location is empty on a non-page entry"),
            Self::DanglingSignature { signature } => {
                write!(f, "location has signature '{}' but entry is not a method", signature)
            }
            Self::TitleMismatch { symbol } => {
                write!(f, "anchor symbol '{}' does not match title", symbol)
            }
            Self::EmptyIndex => f.write_str("index contains no entries"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Position of the entry in the index, `None` for index-level issues
    pub index: Option<usize>,
    pub title: String,
    pub kind: IssueKind,
}

impl Issue {
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "{}: entry #{} '{}': {}",
                self.severity(),
                index,
                self.title,
                self.kind
            ),
            None => write!(f, "{}: {}", self.severity(), self.kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn into_result(self) -> Result<Self, ValidationError> {
        let count = self.errors().count();
        let first = self.errors().next().map(ToString::to_string);
        match first {
            None => Ok(self),
            Some(first) => Err(ValidationError { count, first }),
        }
    }
}

/// Check every entry of an index.
pub fn validate(index: &SearchIndex) -> ValidationReport {
    let mut issues = Vec::new();

    if index.is_empty() {
        issues.push(Issue {
            index: None,
            title: String::new(),
            kind: IssueKind::EmptyIndex,
        });
    }

    for (position, entry) in index.iter().enumerate() {
        for kind in check_entry(entry) {
            issues.push(Issue {
                index: Some(position),
                title: entry.title.clone(),
                kind,
            });
        }
    }

    let report = ValidationReport {
        checked: index.len(),
        issues,
    };

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if errors > 0 {
        tracing::warn!(
            "Validation found {} error(s), {} warning(s) in {} entries",
            errors,
            warnings,
            report.checked
        );
    } else {
        tracing::debug!(
            "Validation passed for {} entries ({} warning(s))",
            report.checked,
            warnings
        );
    }

    report
}

fn check_entry(entry: &DocEntry) -> Vec<IssueKind> {
    let mut kinds = Vec::new();

    if entry.page.is_empty() {
        kinds.push(IssueKind::EmptyField("page"));
    }
    if entry.title.is_empty() {
        kinds.push(IssueKind::EmptyField("title"));
    }
    // Page entries address the page root, which the generator writes as "".
    if entry.location.is_empty() && entry.category != Category::Page {
        kinds.push(IssueKind::EmptyLocation);
    }

    let anchor = entry.anchor();
    if let Some(signature) = anchor.signature
        && entry.category != Category::Method
    {
        kinds.push(IssueKind::DanglingSignature {
            signature: signature.to_string(),
        });
    }

    if entry.is_api_item()
        && let Some(symbol) = anchor.symbol
        && symbol != entry.title
    {
        kinds.push(IssueKind::TitleMismatch {
            symbol: symbol.to_string(),
        });
    }

    kinds
}
