//! Transport to the web server hosting the configuration file
//!
//! The loader and saver only see the [`Transport`] trait, so tests can swap the
//! HTTP client for an in-memory fake.

use crate::{Error, Result, config::Settings};
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Read and write access to resources below a base location
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a text resource (GET)
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Post form fields to a resource and return the plain-text answer
    async fn submit_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<String>;
}

/// HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
    /// Base URL every path is resolved against
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from the network and remote settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let network = &settings.network;
        let mut client_builder = Client::builder()
            .user_agent(network.user_agent.as_str())
            .timeout(Duration::from_secs(network.request_timeout))
            .connect_timeout(Duration::from_secs(network.connect_timeout));

        if let Some(proxy_url) = settings.get_proxy_url() {
            let proxy = Proxy::all(&proxy_url).map_err(|e| {
                Error::config("proxy", format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build()?;
        let base_url = parse_base_url(&settings.remote.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Create a transport with an existing client (for testing)
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Base URL of the web server
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative resource path against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Server returned error status {}", status);
            return Err(Error::status(status.as_u16(), body));
        }

        Ok(body)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Failed to fetch {}: {}", path, e);
            Error::Http(e)
        })?;

        Self::read_body(response).await
    }

    async fn submit_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<String> {
        let url = self.resolve(path)?;
        debug!("POST {} ({} form fields)", url, fields.len());

        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to post to {}: {}", path, e);
                Error::Http(e)
            })?;

        Self::read_body(response).await
    }
}

/// Parse a base URL, making sure it ends with `/` so relative paths join below it
fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
