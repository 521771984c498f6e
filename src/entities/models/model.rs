use serde::{Deserialize, Serialize};

/// 单个预训练权重文件：文件名 -> 下载地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub filename: String,
    pub url: String,
}

impl ModelEntry {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self { filename: filename.into(), url: url.into() }
    }
}
