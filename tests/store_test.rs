mod common;

use assert2::{check, let_assert};
use common::{IsolatedStore, isolated_store};
use docindex::LoadError;
use rstest::rstest;
use std::sync::Arc;

/// Test: Loading the same unchanged file twice reuses the cached parse.
#[rstest]
#[tokio::test]
async fn unchanged_file_hits_cache(isolated_store: IsolatedStore) {
    let store = &isolated_store.store;
    let first = store.get(&isolated_store.index_path).await.unwrap();
    let second = store.get(&isolated_store.index_path).await.unwrap();

    check!(Arc::ptr_eq(&first, &second));
    check!(store.cached_count().await == 1);
}

/// Test: Rewriting the file in place is picked up on the next load.
#[rstest]
#[tokio::test]
async fn rewritten_file_is_reloaded(isolated_store: IsolatedStore) {
    let store = &isolated_store.store;
    let before = store.get(&isolated_store.index_path).await.unwrap();
    check!(before.len() == 14);

    std::fs::write(
        &isolated_store.index_path,
        r#"var documenterSearchIndex = {"docs":
[{"location":"","page":"Home","title":"Home","text":"","category":"page"}]
}
"#,
    )
    .unwrap();

    let after = store.get(&isolated_store.index_path).await.unwrap();
    check!(after.len() == 1);
    check!(store.cached_count().await == 1);
}

/// Test: The current index is unset until opened.
#[rstest]
#[tokio::test]
async fn current_requires_open(isolated_store: IsolatedStore) {
    let store = &isolated_store.store;
    let_assert!(Err(error) = store.current().await);
    check!(error.to_string().contains("open_index"));

    let path = isolated_store.index_path.display().to_string();
    let (opened, index) = store.open(&path).await.unwrap();
    check!(opened.ends_with("build/search_index.js"));
    check!(store.current().await.unwrap().len() == index.len());
}

/// Test: Missing files surface as a typed not-found error through anyhow.
#[rstest]
#[tokio::test]
async fn open_missing_file_fails(isolated_store: IsolatedStore) {
    let missing = isolated_store.workspace.path().join("missing.js");
    let_assert!(Err(error) = isolated_store.store.open(&missing.display().to_string()).await);
    check!(matches!(
        error.downcast_ref::<LoadError>(),
        Some(LoadError::NotFound { .. })
    ));
    check!(isolated_store.store.current_path().await.is_none());
}

#[rstest]
#[tokio::test]
async fn clear_cache_empties_store(isolated_store: IsolatedStore) {
    let store = &isolated_store.store;
    store.get(&isolated_store.index_path).await.unwrap();
    store.clear_cache().await;
    check!(store.cached_count().await == 0);
}
