use crate::error::{Result, SetupError};
use crate::utils::config::{SetupConfig, SETUP_CONFIG_PATH};
use log::{info, warn, LevelFilter};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

pub const LOG_CONFIG_PATH: &str = "config/log4rs.yml";
pub const LOG_FILE: &str = "logs/setup.log";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// 初始化日志、加载配置并设置界面语言
pub fn init(root: &Path) -> Result<SetupConfig> {
    init_logging(root)?;

    let config = SetupConfig::load_or_default(root.join(SETUP_CONFIG_PATH))?;
    info!("Setup configuration loaded");

    apply_locale(&config.locale);
    info!("Directories: {}, config dir: {}", config.directories.len(), config.config_dir);

    Ok(config)
}

/// 优先使用 `config/log4rs.yml`，否则写入 `logs/setup.log`
pub fn init_logging(root: &Path) -> Result<()> {
    let config_file = root.join(LOG_CONFIG_PATH);
    if config_file.is_file() {
        log4rs::init_file(&config_file, Default::default())
            .map_err(|e| SetupError::Logging(e.to_string()))?;
        return Ok(());
    }

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(root.join(LOG_FILE))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))
        .map_err(|e| SetupError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| SetupError::Logging(e.to_string()))?;
    Ok(())
}

/// Unknown locales keep the current one.
pub fn apply_locale(locale: &str) -> bool {
    if rust_i18n::available_locales!().iter().any(|l| *l == locale) {
        rust_i18n::set_locale(locale);
        true
    } else {
        warn!("Locale {} is not available, keeping {}", locale, &*rust_i18n::locale());
        false
    }
}
