// src/services/source.rs

//! Where result pages come from.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::CrawlerConfig;
use crate::utils::http;

/// Anything that can turn a URL into an HTML body.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body at `url`. Non-success responses are errors.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Live source backed by a reqwest client.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the client from crawler settings (user agent, timeout).
    pub fn from_config(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::new(http::create_client(config)?))
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        http::fetch_text(&self.client, url).await
    }
}
