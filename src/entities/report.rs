use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutcome {
    pub filename: String,
    pub destination: PathBuf,
    pub outcome: DownloadOutcome,
}

/// 单个模型家族的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    pub family: String,
    pub manual: bool,
    pub models: Vec<ModelOutcome>,
}

impl FamilyReport {
    pub fn count(&self, outcome: DownloadOutcome) -> usize {
        self.models.iter().filter(|m| m.outcome == outcome).count()
    }
}

/// 一次完整运行的汇总
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub directories: Vec<PathBuf>,
    pub families: Vec<FamilyReport>,
    pub config_files: Vec<PathBuf>,
}

impl SetupReport {
    pub fn count(&self, outcome: DownloadOutcome) -> usize {
        self.families.iter().map(|f| f.count(outcome)).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.count(DownloadOutcome::Failed) > 0
    }
}
