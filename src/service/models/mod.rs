//! 模型集合驱动
//!
//! 针对单个模型家族：
//! - 下载型家族逐个检查权重文件，已存在则跳过，否则交给下载器
//! - 手动型家族只打印指引，不发起网络请求
//!
//! # 示例
//! ```rust,no_run
//! use std::path::Path;
//! use vision_setup::entities::models::yolo;
//! use vision_setup::service::models::ModelSetDriver;
//! use vision_setup::utils::ModelDownloader;
//!
//! #[tokio::main]
//! async fn main() {
//!     let downloader = ModelDownloader::default();
//!     let driver = ModelSetDriver::new(Path::new("."), &downloader);
//!     let report = driver.drive(&yolo::family()).await;
//!     println!("{:?}", report);
//! }
//! ```

use crate::entities::models::{Acquisition, ModelFamily};
use crate::entities::report::{DownloadOutcome, FamilyReport, ModelOutcome};
use crate::utils::download::Downloader;
use rust_i18n::t;
use std::path::Path;

pub struct ModelSetDriver<'a, D: Downloader + ?Sized> {
    root: &'a Path,
    downloader: &'a D,
}

fn family_icon(id: &str) -> &'static str {
    match id {
        "yolo" => "🔥",
        "ssd" => "🚀",
        "mobilenet" => "📱",
        _ => "📦",
    }
}

impl<'a, D: Downloader + ?Sized> ModelSetDriver<'a, D> {
    pub fn new(root: &'a Path, downloader: &'a D) -> Self {
        Self { root, downloader }
    }

    /// 处理一个模型家族
    ///
    /// 下载失败只记录在报告中，不会中断后续文件。
    pub async fn drive(&self, family: &ModelFamily) -> FamilyReport {
        println!(
            "\n{}",
            t!(
                "models.banner",
                icon = family_icon(&family.id),
                family = family.display_name.as_str()
            )
        );

        match &family.acquisition {
            Acquisition::Manual { guidance } => {
                log::warn!("{} models require a manual step", family.display_name);
                for line in guidance {
                    println!("{}", line);
                }
                FamilyReport { family: family.id.clone(), manual: true, models: Vec::new() }
            }
            Acquisition::Download => {
                let mut models = Vec::with_capacity(family.models.len());
                for entry in &family.models {
                    let destination = family.destination(self.root, entry);
                    let outcome = if destination.exists() {
                        println!("{}", t!("models.exists", file = entry.filename.as_str()));
                        log::warn!("Skipping {}, already present", destination.display());
                        DownloadOutcome::Skipped
                    } else if self.downloader.download(&entry.url, &destination).await {
                        DownloadOutcome::Downloaded
                    } else {
                        DownloadOutcome::Failed
                    };
                    models.push(ModelOutcome {
                        filename: entry.filename.clone(),
                        destination,
                        outcome,
                    });
                }
                FamilyReport { family: family.id.clone(), manual: false, models }
            }
        }
    }
}
