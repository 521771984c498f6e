use crate::error::Result;
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 按顺序创建工作区目录（含缺失的父目录）
///
/// 已存在的目录不算错误；其他 IO 错误直接向上传播并终止本次运行。
pub fn create_directories<S: AsRef<str>>(root: &Path, directories: &[S]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(directories.len());
    for directory in directories {
        let directory = directory.as_ref();
        let path = root.join(directory);
        std::fs::create_dir_all(&path)?;
        println!("{}", t!("directories.created", dir = directory));
        log::info!("Directory ready: {}", path.display());
        created.push(path);
    }
    Ok(created)
}
