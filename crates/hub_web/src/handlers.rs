use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::config::ProxyConfig;
use crate::AppState;

fn default_country() -> String {
    "us".to_string()
}

fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u32,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "Backend running" }))
}

/// Pass-through to the upstream headlines API. The response body is relayed
/// verbatim, including upstream error envelopes; only transport failures
/// become a 500 here.
pub async fn news(State(state): State<Arc<AppState>>, Query(query): Query<NewsQuery>) -> Response {
    let url = build_headlines_url(&state.config, &query);
    info!(
        "Fetching news from {}",
        redact_key(&url, &state.config.api_key)
    );

    let body: std::result::Result<Value, reqwest::Error> = async {
        state.http.get(&url).send().await?.json().await
    }
    .await;

    match body {
        Ok(body) => {
            if let Some(message) = upstream_error_message(&body) {
                error!("News API error: {}", message);
            }
            Json(body).into_response()
        }
        Err(e) => {
            error!("Failed to fetch news: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch news" })),
            )
                .into_response()
        }
    }
}

/// The message to log when the upstream envelope reports `status: "error"`;
/// `None` for a healthy response.
fn upstream_error_message(body: &Value) -> Option<&str> {
    if body.get("status").and_then(|v| v.as_str()) == Some("error") {
        Some(
            body.get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown"),
        )
    } else {
        None
    }
}

/// Upstream URL for a headlines query; category is included only when it is
/// present and non-empty, and the API key always goes last.
pub fn build_headlines_url(config: &ProxyConfig, query: &NewsQuery) -> String {
    let mut url = format!(
        "{}/top-headlines?country={}&pageSize={}",
        config.upstream, query.country, query.page_size
    );
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        url.push_str(&format!("&category={}", category));
    }
    url.push_str(&format!("&apiKey={}", config.api_key));
    url
}

fn redact_key(url: &str, api_key: &str) -> String {
    url.replace(api_key, "API_KEY")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProxyConfig {
        ProxyConfig {
            api_key: "secret123".to_string(),
            port: 5000,
            upstream: "https://newsapi.org/v2".to_string(),
        }
    }

    #[test]
    fn test_url_without_category() {
        let query = NewsQuery {
            country: "us".to_string(),
            category: None,
            page_size: 20,
        };
        assert_eq!(
            build_headlines_url(&config(), &query),
            "https://newsapi.org/v2/top-headlines?country=us&pageSize=20&apiKey=secret123"
        );
    }

    #[test]
    fn test_url_with_category() {
        let query = NewsQuery {
            country: "de".to_string(),
            category: Some("technology".to_string()),
            page_size: 10,
        };
        assert_eq!(
            build_headlines_url(&config(), &query),
            "https://newsapi.org/v2/top-headlines?country=de&pageSize=10&category=technology&apiKey=secret123"
        );
    }

    #[test]
    fn test_empty_category_is_omitted() {
        let query = NewsQuery {
            country: "us".to_string(),
            category: Some(String::new()),
            page_size: 20,
        };
        assert!(!build_headlines_url(&config(), &query).contains("category"));
    }

    #[test]
    fn test_key_is_redacted_in_logs() {
        let query = NewsQuery {
            country: "us".to_string(),
            category: None,
            page_size: 20,
        };
        let url = build_headlines_url(&config(), &query);
        let redacted = redact_key(&url, "secret123");
        assert!(!redacted.contains("secret123"));
        assert!(redacted.ends_with("apiKey=API_KEY"));
    }

    #[test]
    fn test_upstream_error_envelope_is_detected() {
        let body = json!({ "status": "error", "message": "apiKeyInvalid" });
        assert_eq!(upstream_error_message(&body), Some("apiKeyInvalid"));

        let body = json!({ "status": "error" });
        assert_eq!(upstream_error_message(&body), Some("unknown"));

        let body = json!({ "status": "ok", "articles": [] });
        assert_eq!(upstream_error_message(&body), None);
    }

    #[test]
    fn test_query_defaults() {
        let query: NewsQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.country, "us");
        assert_eq!(query.page_size, 20);
        assert!(query.category.is_none());
    }
}
