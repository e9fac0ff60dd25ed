use std::sync::Arc;

use hub_core::{Article, ArticleId, Result};
use tracing::debug;

use crate::KeyValueStore;

fn article_key(id: &ArticleId) -> String {
    format!("article_{}", id)
}

/// Cache of full article records, keyed by derived ID, so detail views can
/// re-load an article after navigation. Entries are never evicted or expired;
/// unbounded growth is the accepted trade-off.
pub struct ArticleStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ArticleStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persists the article under its derived ID and returns that ID.
    /// A prior record under the same ID is overwritten, last write wins.
    pub fn store(&self, article: &Article) -> Result<ArticleId> {
        let id = article.id();
        let serialized = serde_json::to_string(article)?;
        self.backend.set(&article_key(&id), &serialized)?;
        Ok(id)
    }

    /// Looks up a cached article. Absent keys and records that no longer
    /// parse both come back as `None`; neither is an error.
    pub fn retrieve(&self, id: &ArticleId) -> Option<Article> {
        let raw = self.backend.get(&article_key(id))?;
        match serde_json::from_str(&raw) {
            Ok(article) => Some(article),
            Err(e) => {
                debug!("Discarding unparseable article record {}: {}", id, e);
                None
            }
        }
    }
}
