//! Session state: cached indices and the currently opened index.
//!
//! Parsed indices are cached by canonical path and shared as `Arc<SearchIndex>`.
//! A cached entry is reused only while the file's content digest is unchanged,
//! so regenerating the docs in place is picked up on the next request.

use crate::error::Result;
use crate::index::{SearchIndex, io_error};
use anyhow::{Context, anyhow};
use lru::LruCache;
use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use xxhash_rust::xxh3::xxh3_64;

/// Maximum number of parsed indices to keep in memory.
const LRU_CACHE_SIZE: NonZeroUsize = NonZeroUsize::new(16).unwrap();

struct CachedIndex {
    digest: u64,
    index: Arc<SearchIndex>,
}

/// Shared cache of loaded indices plus the session's current index path.
pub struct IndexStore {
    cache: RwLock<LruCache<PathBuf, CachedIndex>>,
    current: RwLock<Option<PathBuf>>,
}

impl std::fmt::Debug for IndexStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexStore")
            .field("cache_size", &self.cache.try_read().map(|cache| cache.len()).ok())
            .field("current", &self.current.try_read().ok().and_then(|c| c.clone()))
            .finish()
    }
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexStore {
    pub fn new() -> Self {
        Self::with_capacity(LRU_CACHE_SIZE)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: RwLock::new(LruCache::new(capacity)),
            current: RwLock::new(None),
        }
    }

    /// Load an index, reusing the cached parse when the file content is unchanged.
    pub async fn get(&self, path: &Path) -> Result<Arc<SearchIndex>> {
        let path = tokio::fs::canonicalize(path)
            .await
            .map_err(|source| io_error(path, source))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| io_error(&path, source))?;
        let digest = xxh3_64(&bytes);

        {
            let mut cache = self.cache.write().await;
            if let Some(cached) = cache.get(&path)
                && cached.digest == digest
            {
                tracing::debug!("Cache hit for {}", path.display());
                return Ok(cached.index.clone());
            }
        }

        tracing::debug!("Cache miss for {} (digest {:016x})", path.display(), digest);
        let source = String::from_utf8(bytes)
            .with_context(|| format!("Search index at {} is not valid UTF-8", path.display()))?;
        let index = Arc::new(
            SearchIndex::parse(&source)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
        );
        tracing::info!("Loaded {} entries from {}", index.len(), path.display());

        self.cache.write().await.put(
            path,
            CachedIndex {
                digest,
                index: index.clone(),
            },
        );
        Ok(index)
    }

    /// Load an index and make it the session's current one.
    pub async fn open(&self, path: &str) -> Result<(PathBuf, Arc<SearchIndex>)> {
        let expanded = expand_tilde(path);
        let path = tokio::fs::canonicalize(expanded.as_ref())
            .await
            .map_err(|source| io_error(Path::new(expanded.as_ref()), source))?;
        let index = self.get(&path).await?;

        let previous = self.current.write().await.replace(path.clone());
        if previous.as_ref() != Some(&path) {
            tracing::info!("Current index set to {}", path.display());
        }
        Ok((path, index))
    }

    pub async fn current_path(&self) -> Option<PathBuf> {
        self.current.read().await.clone()
    }

    /// The current index, reloaded if its file changed since it was opened.
    pub async fn current(&self) -> Result<Arc<SearchIndex>> {
        let path = self
            .current_path()
            .await
            .ok_or_else(|| anyhow!("No search index opened. Use open_index first."))?;
        self.get(&path).await
    }

    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
