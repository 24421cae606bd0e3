use crate::components::workbook::Workbook;
use crate::error::{fetch_error, Error, NormalizerResult};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Anywhere a workbook's raw bytes can come from
#[async_trait]
pub trait WorkbookSource: Send + Sync {
    /// Human-readable origin, used in logs and errors
    fn describe(&self) -> String;

    /// Read the complete workbook file
    async fn read_bytes(&self) -> NormalizerResult<Vec<u8>>;
}

/// Workbook served over HTTP
pub struct RemoteWorkbook {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl RemoteWorkbook {
    pub fn new(client: Client, url: Url, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl WorkbookSource for RemoteWorkbook {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn read_bytes(&self) -> NormalizerResult<Vec<u8>> {
        let response = self
            .client
            .get(self.url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| fetch_error(&format!("Failed to fetch {}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(fetch_error(&format!(
                "Failed to fetch {}: HTTP {}",
                self.url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(&format!("Failed to read body of {}: {}", self.url, e)))?;
        Ok(bytes.to_vec())
    }
}

/// Workbook file supplied by the caller
pub struct FileWorkbook {
    path: PathBuf,
}

impl FileWorkbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WorkbookSource for FileWorkbook {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_bytes(&self) -> NormalizerResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", self.path.display(), e),
            ))
        })
    }
}

/// Workbook already held in memory, such as an upload body
pub struct MemoryWorkbook {
    label: String,
    bytes: Vec<u8>,
}

impl MemoryWorkbook {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }
}

#[async_trait]
impl WorkbookSource for MemoryWorkbook {
    fn describe(&self) -> String {
        self.label.clone()
    }

    async fn read_bytes(&self) -> NormalizerResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Read and decode a workbook from any source
pub async fn load_workbook(source: &dyn WorkbookSource) -> NormalizerResult<Workbook> {
    let bytes = source.read_bytes().await?;
    info!("Read {} bytes from {}", bytes.len(), source.describe());
    Workbook::from_bytes(bytes)
}
