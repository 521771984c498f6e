use std::fs;
use tempfile::TempDir;
use vision_setup::error::SetupError;
use vision_setup::service::configs::write_config_files;

const EXPECTED_DEFAULT_CONFIG: &str = r#"# Default Configuration
model:
  type: "yolo"
  confidence: 0.5
  nms_threshold: 0.4
  
input:
  source: "webcam"  # webcam, video file path, or image path
  
output:
  save_video: true
  save_path: "results/"
  show_fps: true
  
tracking:
  max_disappeared: 30
  max_distance: 50
  
visualization:
  show_labels: true
  show_confidence: true
  box_thickness: 2
  text_scale: 0.5
"#;

const EXPECTED_YOLO_CONFIG: &str = r#"# YOLO Configuration
model:
  type: "yolo"
  weights: "models/yolo/yolov5s.pt"
  confidence: 0.5
  nms_threshold: 0.4
  device: "auto"  # auto, cpu, cuda
  
classes:
  - "person"
  - "bicycle"
  - "car"
  - "motorcycle"
  - "airplane"
  - "bus"
  - "train"
  - "truck"
  - "boat"
  - "traffic light"
  
tracking:
  tracker_type: "kalman"
  max_disappeared: 30
  max_distance: 50
"#;

fn workspace_with_configs() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("configs")).expect("create configs dir");
    dir
}

#[test]
fn test_writes_exact_documents() {
    let dir = workspace_with_configs();

    let written = write_config_files(dir.path(), "configs").unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("configs/default_config.yaml"),
            dir.path().join("configs/yolo_config.yaml")
        ]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("configs/default_config.yaml")).unwrap(),
        EXPECTED_DEFAULT_CONFIG
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("configs/yolo_config.yaml")).unwrap(),
        EXPECTED_YOLO_CONFIG
    );
}

#[test]
fn test_existing_files_are_overwritten() {
    let dir = workspace_with_configs();
    let target = dir.path().join("configs/yolo_config.yaml");
    fs::write(&target, "model:\n  type: \"ssd\"\n").unwrap();

    write_config_files(dir.path(), "configs").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), EXPECTED_YOLO_CONFIG);
    assert!(!dir.path().join("configs/yolo_config.yaml.bak").exists());
}

#[test]
fn test_config_dir_is_not_created() {
    let dir = TempDir::new().unwrap();

    let result = write_config_files(dir.path(), "configs");

    assert!(matches!(result, Err(SetupError::ConfigDirMissing(_))));
    assert!(!dir.path().join("configs").exists());
}

#[test]
fn test_custom_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("settings/detect")).unwrap();

    let written = write_config_files(dir.path(), "settings/detect").unwrap();

    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.starts_with(dir.path().join("settings/detect"))));
}
