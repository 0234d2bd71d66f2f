use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CatalogConfig, CatalogSourceConfig};

const USER_AGENT: &str = concat!("prompt-atlas/", env!("CARGO_PKG_VERSION"));

/// Supplies the raw prompt CSV. Implementations do no caching of their own.
#[async_trait]
pub trait PromptSource: Debug + Send + Sync {
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches the CSV over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpPromptSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPromptSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn map_error(&self, source: reqwest::Error) -> SourceError {
        SourceError::Http {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl PromptSource for HttpPromptSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| self.map_error(err))?;

        response.text().await.map_err(|err| self.map_error(err))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the CSV from a local file, e.g. a vendored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePromptSource {
    path: PathBuf,
}

impl FilePromptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PromptSource for FilePromptSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Source selected from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Remote(HttpPromptSource),
    File(FilePromptSource),
}

impl ConfiguredSource {
    pub fn from_config(config: &CatalogConfig) -> Result<Self, SourceError> {
        match &config.source {
            CatalogSourceConfig::Remote(url) => Ok(Self::Remote(HttpPromptSource::new(
                url.clone(),
                config.fetch_timeout,
            )?)),
            CatalogSourceConfig::File(path) => Ok(Self::File(FilePromptSource::new(path.clone()))),
        }
    }
}

#[async_trait]
impl PromptSource for ConfiguredSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            ConfiguredSource::Remote(source) => source.fetch().await,
            ConfiguredSource::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Remote(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }
}
