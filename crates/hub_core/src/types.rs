use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ArticleId;

/// One headline as returned by the news source. Field names follow the
/// NewsAPI wire shape (camelCase) so responses deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: Source,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// The ID this article is stored and looked up under.
    pub fn id(&self) -> ArticleId {
        ArticleId::derive(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
}

/// A user-saved reference to an article. Subset of fields only; the full
/// record lives in the article cache. Serialized camelCase to stay readable
/// by sequences persisted under the original scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: ArticleId,
    pub title: String,
    pub url: String,
    pub saved_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: article.id(),
            title: article.title.clone(),
            url: article.url.clone(),
            saved_at: Utc::now(),
        }
    }
}
