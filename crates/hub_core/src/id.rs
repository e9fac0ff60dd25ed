use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_LEN: usize = 16;

/// Short deterministic token derived from an article's URL, used as the
/// storage and lookup key for both the article cache and bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Derives the ID for a URL: base64-encode the bytes, keep only the
    /// alphanumeric characters, truncate to 16. Deterministic and total;
    /// distinct URLs sharing a filtered prefix collide, which is accepted.
    /// The truncation length must not change: it would orphan every record
    /// persisted under the old scheme.
    pub fn derive(url: &str) -> Self {
        let encoded = STANDARD.encode(url.as_bytes());
        let id = encoded
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(ID_LEN)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
