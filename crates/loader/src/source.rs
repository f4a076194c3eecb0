use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::error::LoadError;
use tracing::debug;
use url::Url;

/// Where the dataset files live.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn describe(&self) -> String;

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for FsSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(file_name);
        debug!(path = %path.display(), "reading dataset file");
        tokio::fs::read(&path)
            .await
            .map_err(|err| LoadError::fetch(file_name, err))
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(mut base: Url) -> Self {
        // Url::join replaces the last segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            base,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, LoadError> {
        let url = self
            .base
            .join(file_name)
            .map_err(|err| LoadError::fetch(file_name, err))?;
        debug!(%url, "fetching dataset");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| LoadError::fetch(file_name, err))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| LoadError::fetch(file_name, err))?;
        Ok(body.to_vec())
    }
}

/// An http(s) URL selects [`HttpSource`]; anything else is a directory path.
pub fn source_for(locator: &str) -> Box<dyn DataSource> {
    match Url::parse(locator) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Box::new(HttpSource::new(url)),
        _ => Box::new(FsSource::new(locator)),
    }
}
