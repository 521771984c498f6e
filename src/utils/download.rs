use crate::error::Result;
use crate::utils::config::DEFAULT_CHUNK_SIZE;
use crate::utils::progress::{ConsoleProgress, DownloadProgress, ProgressSink};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use rust_i18n::t;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// 下载单个文件，失败时只报告不抛出
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Returns `true` when the whole body reached `destination`.
    async fn download(&self, url: &str, destination: &Path) -> bool;
}

/// 基于 reqwest 的流式下载器
///
/// 目标文件的父目录必须已经存在；失败时可能留下写了一半的文件。
pub struct ModelDownloader {
    client: Client,
    chunk_size: usize,
    progress: Arc<dyn ProgressSink>,
}

impl ModelDownloader {
    /// `timeout` of `None` keeps reqwest's default of waiting indefinitely.
    pub fn new(chunk_size: usize, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            chunk_size: chunk_size.max(1),
            progress: Arc::new(ConsoleProgress::default()),
        })
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// 下载并返回写入的字节数
    pub async fn try_download(&self, url: &str, destination: &Path) -> Result<u64> {
        log::info!("Downloading {} -> {}", url, destination.display());

        let response = self.client.get(url).send().await?.error_for_status()?;
        let total = response.content_length().unwrap_or(0);

        let label = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| destination.display().to_string());
        let mut progress = DownloadProgress::new(label, total);

        let mut file = tokio::fs::File::create(destination).await?;
        let written = self.write_body(response, &mut file, &mut progress).await;
        // 中途失败也要结束进度行
        self.progress.finish(&progress);
        written?;

        log::debug!(
            "{} bytes written to {} in {} byte chunks (declared {})",
            progress.downloaded,
            destination.display(),
            self.chunk_size(),
            total
        );
        Ok(progress.downloaded)
    }

    async fn write_body(
        &self,
        response: reqwest::Response,
        file: &mut tokio::fs::File,
        progress: &mut DownloadProgress,
    ) -> Result<()> {
        let mut stream = response.bytes_stream();
        while let Some(item) = stream.next().await {
            let bytes = item?;
            for chunk in bytes.chunks(self.chunk_size) {
                file.write_all(chunk).await?;
                progress.downloaded += chunk.len() as u64;
                self.progress.update(progress);
            }
        }
        file.flush().await?;
        Ok(())
    }
}

impl Default for ModelDownloader {
    fn default() -> Self {
        Self {
            client: Client::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress: Arc::new(ConsoleProgress::default()),
        }
    }
}

#[async_trait]
impl Downloader for ModelDownloader {
    async fn download(&self, url: &str, destination: &Path) -> bool {
        let path = destination.display().to_string();
        match self.try_download(url, destination).await {
            Ok(bytes) => {
                println!("{}", t!("download.success", path = path.as_str()));
                log::info!("Downloaded {} ({} bytes)", path, bytes);
                true
            }
            Err(e) => {
                println!("{}", t!("download.failure", path = path.as_str(), error = e.to_string()));
                log::error!("Download of {} from {} failed: {}", path, url, e);
                false
            }
        }
    }
}
