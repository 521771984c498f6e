use crate::entities::config_document::CONFIG_DOCUMENTS;
use crate::error::{Result, SetupError};
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 写出两个静态 YAML 配置文件，已存在的文件直接覆盖
///
/// The output directory is not created here; it must already exist.
pub fn write_config_files(root: &Path, config_dir: &str) -> Result<Vec<PathBuf>> {
    println!("\n{}", t!("configs.banner"));

    let dir = root.join(config_dir);
    if !dir.is_dir() {
        log::error!("Config directory {} is missing", dir.display());
        return Err(SetupError::ConfigDirMissing(dir));
    }

    let mut written = Vec::with_capacity(CONFIG_DOCUMENTS.len());
    for document in CONFIG_DOCUMENTS {
        let path = dir.join(document.file_name);
        std::fs::write(&path, document.content)?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }

    println!("{}", t!("configs.done"));
    Ok(written)
}
