use hub_core::{Article, ArticleId, Error, Result};
use hub_storage::ArticleStore;
use tracing::warn;

use crate::headlines::HeadlinesClient;
use crate::mock;

/// Owns the per-session view state: the headlines currently on screen and
/// the selected country. Every fetched article is cached before its ID is
/// handed out, so a detail view can always re-load it by ID.
pub struct Session {
    client: HeadlinesClient,
    articles: ArticleStore,
    current_articles: Vec<Article>,
    current_country: String,
}

impl Session {
    pub fn new(client: HeadlinesClient, articles: ArticleStore) -> Self {
        let current_country = client.config().country.clone();
        Self {
            client,
            articles,
            current_articles: Vec::new(),
            current_country,
        }
    }

    pub fn current_articles(&self) -> &[Article] {
        &self.current_articles
    }

    pub fn current_country(&self) -> &str {
        &self.current_country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.current_country = country.into();
    }

    /// Loads top headlines for the current country. An unreachable proxy
    /// degrades to the mock placeholder set; an upstream API error degrades
    /// to an empty list. Neither is surfaced as a failure here.
    pub async fn load_headlines(&mut self, category: Option<&str>) -> Result<&[Article]> {
        let articles = match self
            .client
            .top_headlines(category, &self.current_country)
            .await
        {
            Ok(articles) => articles,
            Err(Error::Api(message)) => {
                warn!("News API error: {}", message);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to fetch headlines, using fallback content: {}", e);
                mock::articles()
            }
        };
        self.adopt(articles)?;
        Ok(&self.current_articles)
    }

    /// Client-side search over the default headline page. Errors degrade to
    /// no results.
    pub async fn search(&mut self, query: &str) -> Result<&[Article]> {
        let articles = match self.client.search(query).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Search failed: {}", e);
                Vec::new()
            }
        };
        self.adopt(articles)?;
        Ok(&self.current_articles)
    }

    /// Re-loads a cached article for a detail view.
    pub fn open_article(&self, id: &ArticleId) -> Option<Article> {
        self.articles.retrieve(id)
    }

    fn adopt(&mut self, articles: Vec<Article>) -> Result<()> {
        for article in &articles {
            self.articles.store(article)?;
        }
        self.current_articles = articles;
        Ok(())
    }
}
