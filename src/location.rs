//! Decoding of entry locations into page paths, symbols and method signatures.

use regex::Regex;
use std::sync::LazyLock;

/// Splits a method anchor `Module.name-Tuple{...}` into symbol and signature.
/// Repeated anchors carry a numeric suffix (`...-Tuple{...}-2`) that is dropped.
static METHOD_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<symbol>.+?)-(?P<signature>(?:Tuple|Union|Type)\{.*\})(?:-\d+)?$")
        .expect("method fragment pattern is valid")
});

/// A decoded `location` string.
///
/// - `""` is the root of the home page
/// - `"#AxisSets.Dataset"` is an anchor on the home page
/// - `"api/#AxisSets.validate-Tuple{AxisSets.Dataset}"` is a method anchor on `api/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    /// Page path before `#` (empty for the home page)
    pub page_path: &'a str,
    /// Text after `#`, if any
    pub fragment: Option<&'a str>,
    /// Documented symbol, e.g. `AxisSets.validate`
    pub symbol: Option<&'a str>,
    /// Method signature, e.g. `Tuple{AxisSets.Dataset}`
    pub signature: Option<&'a str>,
}

impl<'a> Anchor<'a> {
    pub fn parse(location: &'a str) -> Self {
        let (page_path, fragment) = match location.split_once('#') {
            Some((page, fragment)) => (page, Some(fragment).filter(|f| !f.is_empty())),
            None => (location, None),
        };

        let (symbol, signature) = match fragment {
            Some(fragment) => match METHOD_FRAGMENT.captures(fragment) {
                Some(caps) => {
                    let symbol = caps.name("symbol").map(|m| &fragment[m.range()]);
                    let signature = caps.name("signature").map(|m| &fragment[m.range()]);
                    (symbol, signature)
                }
                None => (Some(fragment), None),
            },
            None => (None, None),
        };

        Self {
            page_path,
            fragment,
            symbol,
            signature,
        }
    }

    /// True when the location addresses a page rather than a section of it.
    pub const fn is_page_root(&self) -> bool {
        self.fragment.is_none()
    }

    /// Qualifying prefix of the symbol (`AxisSets` for `AxisSets.validate`).
    pub fn module(&self) -> Option<&'a str> {
        self.symbol
            .and_then(|symbol| symbol.rsplit_once('.'))
            .map(|(module, _)| module)
    }

    /// Last segment of the symbol (`validate` for `AxisSets.validate`).
    pub fn name(&self) -> Option<&'a str> {
        self.symbol
            .map(|symbol| symbol.rsplit_once('.').map_or(symbol, |(_, name)| name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn empty_location_is_page_root() {
        let anchor = Anchor::parse("");
        check!(anchor.is_page_root());
        check!(anchor.page_path.is_empty());
        check!(anchor.symbol.is_none());
    }

    #[test]
    fn plain_fragment_is_symbol() {
        let anchor = Anchor::parse("#AxisSets.DEFAULT_FLATTEN_DELIM");
        check!(anchor.symbol == Some("AxisSets.DEFAULT_FLATTEN_DELIM"));
        check!(anchor.signature.is_none());
        check!(anchor.module() == Some("AxisSets"));
        check!(anchor.name() == Some("DEFAULT_FLATTEN_DELIM"));
    }

    #[test]
    fn method_fragment_splits_signature() {
        let anchor = Anchor::parse("#AxisSets.dimpaths-Tuple{AxisSets.Dataset,AxisSets.Pattern}");
        check!(anchor.symbol == Some("AxisSets.dimpaths"));
        check!(anchor.signature == Some("Tuple{AxisSets.Dataset,AxisSets.Pattern}"));
    }

    #[test]
    fn repeated_method_anchor_drops_numeric_suffix() {
        let anchor = Anchor::parse("#AxisSets.validate-Tuple{AxisSets.Dataset}-2");
        check!(anchor.symbol == Some("AxisSets.validate"));
        check!(anchor.signature == Some("Tuple{AxisSets.Dataset}"));
        check!(anchor.fragment == Some("AxisSets.validate-Tuple{AxisSets.Dataset}-2"));
    }

    #[test]
    fn heading_slug_with_dashes_is_not_a_method() {
        let anchor = Anchor::parse("guide/#Getting-Started-1");
        check!(anchor.page_path == "guide/");
        check!(anchor.symbol == Some("Getting-Started-1"));
        check!(anchor.signature.is_none());
        check!(anchor.module().is_none());
        check!(anchor.name() == Some("Getting-Started-1"));
    }

    #[test]
    fn bare_hash_has_no_fragment() {
        let anchor = Anchor::parse("api/#");
        check!(anchor.page_path == "api/");
        check!(anchor.is_page_root());
    }
}
