use crate::entities::models::{default_families, ModelFamily};
use crate::error::{Result, SetupError};
use serde::Deserialize;
use std::path::Path;

pub const SETUP_CONFIG_PATH: &str = "config/setup.yml";
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// 工作区目录，按创建顺序排列
pub const DEFAULT_DIRECTORIES: [&str; 8] = [
    "models/yolo",
    "models/ssd",
    "models/mobilenet",
    "data/videos",
    "data/images",
    "data/annotations",
    "results",
    "logs",
];

fn default_directories() -> Vec<String> {
    DEFAULT_DIRECTORIES.iter().map(|d| d.to_string()).collect()
}

fn default_config_dir() -> String {
    "configs".to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_locale() -> String {
    "en".to_string()
}

/// 可选的 `config/setup.yml`，缺省值与内置行为一致
#[derive(Debug, Clone, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,
    /// `None` falls back to the built-in families, resolved after the locale is set.
    #[serde(default)]
    pub families: Option<Vec<ModelFamily>>,
    #[serde(default = "default_config_dir")]
    pub config_dir: String,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            families: None,
            config_dir: default_config_dir(),
            chunk_size: default_chunk_size(),
            request_timeout_secs: None,
            locale: default_locale(),
        }
    }
}

impl SetupConfig {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_file = std::fs::File::open(config_path)?;
        let config: Self = serde_yaml::from_reader(config_file)?;
        config.validate()?;
        Ok(config)
    }

    /// 文件不存在时使用内置配置；文件存在但无法解析时报错
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.is_file() {
            log::info!("Loading setup configuration from {}", config_path.display());
            Self::load(config_path)
        } else {
            log::debug!("No setup configuration at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SetupError::Config("chunk_size must be greater than zero".to_string()));
        }
        if self.config_dir.trim().is_empty() {
            return Err(SetupError::Config("config_dir must not be empty".to_string()));
        }
        if let Some(families) = &self.families {
            for family in families {
                if family.id.trim().is_empty() {
                    return Err(SetupError::Config("model family id must not be empty".to_string()));
                }
                if let Some(name) = family.duplicate_filename() {
                    return Err(SetupError::Config(format!(
                        "duplicate model file {} in family {}",
                        name, family.id
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn families(&self) -> Vec<ModelFamily> {
        self.families.clone().unwrap_or_else(default_families)
    }
}
