use hub_core::{Article, Error, Result};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client-side configuration, passed in explicitly rather than read from
/// ambient globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
    pub country: String,
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            country: DEFAULT_COUNTRY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Response envelope of the proxy's `/api/news` endpoint.
#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    message: Option<String>,
}

/// Fetches headline lists from the aggregation proxy.
pub struct HeadlinesClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HeadlinesClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Top headlines for a country, optionally narrowed to a category.
    /// Transport failures and upstream `status == "error"` responses both
    /// surface as errors; the caller decides whether to show fallback
    /// content instead.
    pub async fn top_headlines(
        &self,
        category: Option<&str>,
        country: &str,
    ) -> Result<Vec<Article>> {
        let mut url = format!(
            "{}/api/news?country={}&pageSize={}",
            self.config.backend_url, country, self.config.page_size
        );
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            url.push_str(&format!("&category={}", category));
        }
        debug!("Fetching headlines from {}", url);

        let response: HeadlinesResponse = self.http.get(&url).send().await?.json().await?;
        if response.status != "ok" {
            return Err(Error::Api(
                response
                    .message
                    .unwrap_or_else(|| "unknown upstream error".to_string()),
            ));
        }
        Ok(response.articles)
    }

    /// Search stays client-side: fetch the default page, then filter it.
    /// The proxy only serves top headlines, so this searches what a user
    /// currently sees, not the whole news corpus.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let articles = self.top_headlines(None, &self.config.country).await?;
        Ok(filter_articles(articles, query))
    }
}

/// Case-insensitive substring match against title or description.
pub fn filter_articles(articles: Vec<Article>, query: &str) -> Vec<Article> {
    let query = query.to_lowercase();
    articles
        .into_iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&query)
                || a.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let results = filter_articles(mock::articles(), "TECH COMPANY");
        assert_eq!(results.len(), 1);
        assert!(results[0].title.contains("Tech Company"));
    }

    #[test]
    fn test_filter_matches_description() {
        let results = filter_articles(mock::articles(), "ocean currents");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        assert!(filter_articles(mock::articles(), "zebra llama").is_empty());
    }

    #[test]
    fn test_response_envelope_tolerates_missing_fields() {
        let parsed: HeadlinesResponse =
            serde_json::from_str(r#"{"status": "error", "message": "apiKeyInvalid"}"#).unwrap();
        assert_eq!(parsed.status, "error");
        assert!(parsed.articles.is_empty());
        assert_eq!(parsed.message.as_deref(), Some("apiKeyInvalid"));
    }
}
