use crate::{Error, Result, config::ClientConfig};
use async_trait::async_trait;
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::debug;

const DEFAULT_USER_AGENT: &str = concat!("iedb-rs/", env!("CARGO_PKG_VERSION"));

/// Raw reply: the status code and the undecoded body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `fields` form-encoded to `url`. Only connection-level failures
    /// are errors; any HTTP status is returned as a response.
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&'static str, String)],
    ) -> Result<TransportResponse>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent);

        if let Some(proxy_url) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::config(format!("Invalid proxy '{}': {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&'static str, String)],
    ) -> Result<TransportResponse> {
        debug!("POST {} with {} form fields", url, fields.len());

        let response = self.client.post(url).form(fields).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Received status {} with {} byte body", status, body.len());
        Ok(TransportResponse { status, body })
    }
}
