//! Text rendering of entries, statistics and validation reports.

use crate::entry::DocEntry;
use crate::index::IndexStats;
use crate::query::Match;
use crate::validate::ValidationReport;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// DetailLevel level for entry display.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Render one entry.
///
/// - Low: title, category and page
/// - Medium: + summary paragraph
/// - High: + anchor breakdown and the full text
pub fn render_entry(output: &mut String, entry: &DocEntry, detail_level: DetailLevel) -> fmt::Result {
    writeln!(output, "{} ({}) - page: {}", entry.title, entry.category, entry.page)?;

    match detail_level {
        DetailLevel::Low => {}
        DetailLevel::Medium => {
            let summary = entry.summary();
            if !summary.is_empty() {
                writeln!(output, "  {}", summary)?;
            }
        }
        DetailLevel::High => {
            let anchor = entry.anchor();
            if entry.location.is_empty() {
                writeln!(output, "  location: (page root)")?;
            } else {
                writeln!(output, "  location: {}", entry.location)?;
            }
            if let Some(signature) = anchor.signature {
                writeln!(output, "  signature: {}", signature)?;
            }
            let body = entry.body();
            if !body.is_empty() {
                writeln!(output)?;
                for line in body.lines() {
                    writeln!(output, "  {}", line)?;
                }
            }
        }
    }

    Ok(())
}

/// Render a list of entries separated by blank lines.
pub fn render_entries<'a>(
    entries: impl IntoIterator<Item = &'a DocEntry>,
    detail_level: DetailLevel,
) -> String {
    let mut output = String::new();
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = render_entry(&mut output, entry, detail_level);
        if detail_level != DetailLevel::Low {
            output.push('\n');
        }
    }
    output
}

/// Render ranked lookup results.
pub fn render_matches(matches: &[Match<'_>], query: &str, detail_level: DetailLevel) -> String {
    let mut output = format!("Entries matching '{}':\n\n", query);
    for (idx, m) in matches.iter().enumerate() {
        let _ = write!(output, "{}. [relevance {}] ", idx + 1, m.relevance);
        let _ = render_entry(&mut output, m.entry, detail_level);
        output.push('\n');
    }
    output
}

pub fn render_stats(stats: &IndexStats) -> String {
    let mut output = format!(
        "{} entries across {} page(s)\n",
        stats.entries, stats.pages
    );
    for (category, count) in &stats.by_category {
        let _ = writeln!(output, "  • {}: {}", category, count);
    }
    if stats.empty_text > 0 {
        let _ = writeln!(output, "  ({} entries without text)", stats.empty_text);
    }
    output
}

pub fn render_report(report: &ValidationReport) -> String {
    let errors = report.errors().count();
    let warnings = report.warnings().count();

    let mut output = if report.is_valid() {
        format!(
            "OK: {} entries checked, {} warning(s)\n",
            report.checked, warnings
        )
    } else {
        format!(
            "INVALID: {} entries checked, {} error(s), {} warning(s)\n",
            report.checked, errors, warnings
        )
    };

    for issue in &report.issues {
        let _ = writeln!(output, "  {}", issue);
    }
    output
}
