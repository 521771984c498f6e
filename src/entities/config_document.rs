/// 原样写出的静态配置文件，本工具不做解析或校验
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDocument {
    pub file_name: &'static str,
    pub content: &'static str,
}

pub const DEFAULT_CONFIG: ConfigDocument = ConfigDocument {
    file_name: "default_config.yaml",
    content: include_str!("../../templates/default_config.yaml"),
};

pub const YOLO_CONFIG: ConfigDocument = ConfigDocument {
    file_name: "yolo_config.yaml",
    content: include_str!("../../templates/yolo_config.yaml"),
};

pub const CONFIG_DOCUMENTS: [ConfigDocument; 2] = [DEFAULT_CONFIG, YOLO_CONFIG];
