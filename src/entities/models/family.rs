use super::ModelEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 模型的获取方式
///
/// `Manual` 家族只打印指引，不会发起任何网络请求。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Acquisition {
    Download,
    Manual {
        #[serde(default)]
        guidance: Vec<String>,
    },
}

/// 同一检测架构下的一组预训练权重
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFamily {
    pub id: String,
    pub display_name: String,
    pub directory: String,
    pub acquisition: Acquisition,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl ModelFamily {
    /// 权重文件在工作区中的目标路径
    pub fn destination(&self, root: &Path, entry: &ModelEntry) -> PathBuf {
        root.join(&self.directory).join(&entry.filename)
    }

    /// Returns the first filename that appears more than once.
    pub fn duplicate_filename(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.models
            .iter()
            .map(|m| m.filename.as_str())
            .find(|name| !seen.insert(*name))
    }
}
