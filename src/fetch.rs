use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;

/// A single GET returning the response body as text.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with its own client using the given total timeout.
    pub fn with_timeout(timeout_secs: u64) -> reqwest::Result<Self> {
        Ok(Self::new(crate::http_client::create_client(timeout_secs)?))
    }
}

#[async_trait]
impl HttpFetch for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "GET");
        let resp = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("request error: {} ({})", url, e);
                return Err(FetchError::Transport { url: url.to_string(), source: e });
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("request error: {} returned HTTP {}", url, status.as_u16());
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        resp.text().await.map_err(|e| {
            tracing::error!("request error: reading body of {} failed ({})", url, e);
            FetchError::Transport { url: url.to_string(), source: e }
        })
    }
}
