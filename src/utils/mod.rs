pub mod config;
pub mod download;
pub mod init;
pub mod progress;

pub use config::SetupConfig;
pub use download::{Downloader, ModelDownloader};
pub use init::init;
pub use progress::{ConsoleProgress, DownloadProgress, NoProgress, ProgressSink};
