use anyhow::Context;
use std::path::Path;

use vision_setup::entities::DownloadOutcome;
use vision_setup::service::SetupService;
use vision_setup::utils::init;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 以当前目录作为工作区根目录
    let root = Path::new(".");

    // 初始化日志、配置和界面语言
    let config = init::init(root).context("初始化应用程序失败")?;

    let service = SetupService::from_config(root, config).context("创建下载器失败")?;
    let report = service.run().await.context("工作区初始化失败")?;

    // 下载失败不影响退出码
    if report.has_failures() {
        log::warn!("{} model downloads failed", report.count(DownloadOutcome::Failed));
    }

    Ok(())
}
