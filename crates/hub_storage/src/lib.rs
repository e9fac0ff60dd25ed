use hub_core::Result;

pub mod articles;
pub mod backends;
pub mod bookmarks;

pub use articles::ArticleStore;
pub use backends::{FileStore, MemoryStore};
pub use bookmarks::BookmarkStore;

/// The persistence boundary: a synchronous string-keyed key-value store,
/// the shape browser localStorage exposes. Single-writer access is assumed;
/// concurrent writers get last-write-wins with no coordination.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes the value, overwriting unconditionally.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub mod prelude {
    pub use super::{ArticleStore, BookmarkStore, KeyValueStore};
    pub use hub_core::{Article, ArticleId, Bookmark, Result};
}
