use crate::entities::report::{DownloadOutcome, SetupReport};
use crate::error::Result;
use crate::service::configs::write_config_files;
use crate::service::directories::create_directories;
use crate::service::models::ModelSetDriver;
use crate::utils::config::SetupConfig;
use crate::utils::download::{Downloader, ModelDownloader};
use rust_i18n::t;
use std::path::PathBuf;
use std::time::Duration;

const RULE_WIDTH: usize = 50;

/// 工作区初始化流程：目录 -> 模型 -> 配置文件
pub struct SetupService<D: Downloader> {
    root: PathBuf,
    config: SetupConfig,
    downloader: D,
}

impl SetupService<ModelDownloader> {
    /// 根据配置构建使用 HTTP 下载器的服务
    pub fn from_config(root: impl Into<PathBuf>, config: SetupConfig) -> Result<Self> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let downloader = ModelDownloader::new(config.chunk_size, timeout)?;
        Ok(Self::new(root, config, downloader))
    }
}

impl<D: Downloader> SetupService<D> {
    pub fn new(root: impl Into<PathBuf>, config: SetupConfig, downloader: D) -> Self {
        Self { root: root.into(), config, downloader }
    }

    /// 依次执行全部步骤
    ///
    /// Failed downloads are reported but never abort the run. Directory and
    /// config-file errors propagate.
    pub async fn run(&self) -> Result<SetupReport> {
        print_banner();

        let directories = create_directories(&self.root, &self.config.directories)?;

        let driver = ModelSetDriver::new(&self.root, &self.downloader);
        let mut families = Vec::new();
        for family in self.config.families() {
            families.push(driver.drive(&family).await);
        }

        let config_files = write_config_files(&self.root, &self.config.config_dir)?;

        let report = SetupReport { directories, families, config_files };
        log::info!(
            "Setup finished: {} downloaded, {} skipped, {} failed",
            report.count(DownloadOutcome::Downloaded),
            report.count(DownloadOutcome::Skipped),
            report.count(DownloadOutcome::Failed)
        );
        print_footer(&report);
        Ok(report)
    }
}

fn print_banner() {
    println!("{}", t!("setup.banner"));
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_footer(report: &SetupReport) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", t!("setup.done"));
    println!(
        "{}",
        t!(
            "setup.download_summary",
            downloaded = report.count(DownloadOutcome::Downloaded),
            skipped = report.count(DownloadOutcome::Skipped),
            failed = report.count(DownloadOutcome::Failed)
        )
    );
    println!("\n{}", t!("setup.next_steps"));
    println!("{}", t!("setup.step_requirements"));
    println!("{}", t!("setup.step_sources"));
    println!("{}", t!("setup.step_help"));
    println!("\n{}", t!("setup.readme"));
}
