use crate::config::ProxyConfig;

pub struct AppState {
    pub config: ProxyConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
