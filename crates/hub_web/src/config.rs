use hub_core::{Error, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM: &str = "https://newsapi.org/v2";

/// Proxy configuration, built once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub port: u16,
    pub upstream: String,
}

impl ProxyConfig {
    /// Reads `NEWS_API_KEY` (required) and `PORT` (optional) from the
    /// environment, loading a `.env` file first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("NEWS_API_KEY")
            .map_err(|_| Error::Config("NEWS_API_KEY is not set".to_string()))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            port,
            upstream: DEFAULT_UPSTREAM.to_string(),
        })
    }
}
