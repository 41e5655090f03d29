mod common;

use assert2::{check, let_assert};
use common::{TempWorkspace, fixture_index, fixture_path};
use docindex::query::{EntryFilter, find, group_by_page};
use docindex::{Category, LoadError, SearchIndex, validate};
use rstest::rstest;

/// Test: The generated index loads with every entry in navigation order.
#[rstest]
fn fixture_loads_in_order(fixture_index: SearchIndex) {
    check!(fixture_index.len() == 14);
    check!(fixture_index.binding() == "documenterSearchIndex");

    let titles: Vec<_> = fixture_index.iter().map(|e| e.title.as_str()).collect();
    check!(titles[..4] == ["Home", "AxisSets", "Home", "Home"]);
    check!(titles.last() == Some(&"NamedDims.dimnames"));
}

/// Test: Every entry satisfies the schema; warnings only, no errors.
#[rstest]
fn fixture_is_valid(fixture_index: SearchIndex) {
    let report = validate(&fixture_index);
    check!(report.is_valid(), "unexpected errors: {:?}", report.issues);
    check!(report.checked == 14);
    check!(report.warnings().count() == 0, "unexpected warnings: {:?}", report.issues);

    for entry in &fixture_index {
        check!(!entry.page.is_empty());
        check!(!entry.title.is_empty());
        check!(entry.category == Category::Page || !entry.location.is_empty());
    }
}

/// Test: Categories come from the closed set and are counted per kind.
#[rstest]
fn fixture_category_counts(fixture_index: SearchIndex) {
    let stats = fixture_index.stats();
    check!(stats.pages == 1);
    check!(
        stats.by_category
            == vec![
                (Category::Page, 3),
                (Category::Section, 1),
                (Category::Constant, 2),
                (Category::Type, 2),
                (Category::Function, 1),
                (Category::Method, 5),
            ]
    );
}

/// Test: Serializing and parsing again yields the same ordered sequence.
#[rstest]
fn fixture_round_trips(fixture_index: SearchIndex) {
    let from_js = SearchIndex::parse(&fixture_index.to_js().unwrap()).unwrap();
    check!(from_js == fixture_index);

    let from_json = SearchIndex::parse(&fixture_index.to_json_pretty().unwrap()).unwrap();
    check!(from_json.entries() == fixture_index.entries());
}

/// Test: Unicode and escaped text survive loading.
#[rstest]
fn fixture_text_is_decoded(fixture_index: SearchIndex) {
    let matches = find(&fixture_index, "AxisSets.DEFAULT_FLATTEN_DELIM", 1);
    let_assert!([m] = matches.as_slice());
    check!(m.entry.summary() == "DEFAULT_FLATTEN_DELIM");
    check!(m.entry.text.contains(":⁻ (or \\^-)"));
    check!(m.entry.body().ends_with("val4 = 4.3)"));
}

/// Test: Method anchors decode into symbol and signature.
#[rstest]
fn fixture_method_anchors(fixture_index: SearchIndex) {
    let methods = EntryFilter::new()
        .category(Category::Method)
        .apply(&fixture_index);
    check!(methods.len() == 5);

    for method in methods {
        let anchor = method.anchor();
        check!(anchor.symbol == Some(method.title.as_str()));
        check!(anchor.signature.is_some_and(|s| s.starts_with("Tuple{")));
    }
}

#[rstest]
fn fixture_groups_by_page(fixture_index: SearchIndex) {
    let groups = group_by_page(&fixture_index);
    let_assert!([(page, entries)] = groups.as_slice());
    check!(*page == "Home");
    check!(entries.len() == 14);
}

#[tokio::test]
async fn async_load_matches_blocking_load() {
    let blocking = SearchIndex::load_blocking(&fixture_path()).unwrap();
    let loaded = SearchIndex::load(&fixture_path()).await.unwrap();
    check!(loaded == blocking);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let workspace = TempWorkspace::new();
    let result = SearchIndex::load(&workspace.path().join("nope.js")).await;
    let_assert!(Err(LoadError::NotFound { path }) = result);
    check!(path.ends_with("nope.js"));
}

#[test]
fn truncated_file_reports_position() {
    let workspace = TempWorkspace::new();
    let source = std::fs::read_to_string(fixture_path()).unwrap();
    let cut = source.find("#AxisSets.Pattern").unwrap();
    let path = workspace.create_file("broken.js", &source[..cut]);

    let_assert!(Err(LoadError::Syntax { line, .. }) = SearchIndex::load_blocking(&path));
    check!(line >= 1);
}
