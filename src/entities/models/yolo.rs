use super::{Acquisition, ModelEntry, ModelFamily};

const RELEASE_URL: &str = "https://github.com/ultralytics/yolov5/releases/download/v7.0";

const WEIGHTS: [&str; 3] = ["yolov5s.pt", "yolov5m.pt", "yolov5l.pt"];

/// YOLOv5 权重，唯一真正会被下载的家族
pub fn family() -> ModelFamily {
    ModelFamily {
        id: "yolo".to_string(),
        display_name: "YOLO".to_string(),
        directory: "models/yolo".to_string(),
        acquisition: Acquisition::Download,
        models: WEIGHTS
            .iter()
            .map(|name| ModelEntry::new(*name, format!("{}/{}", RELEASE_URL, name)))
            .collect(),
    }
}
