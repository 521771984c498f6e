use super::{Acquisition, ModelEntry, ModelFamily};
use rust_i18n::t;

// The model zoo ships tarballs, not the frozen graphs themselves.
const MODEL_ZOO_URL: &str = "http://download.tensorflow.org/models/object_detection";

pub fn family() -> ModelFamily {
    ModelFamily {
        id: "ssd".to_string(),
        display_name: "SSD".to_string(),
        directory: "models/ssd".to_string(),
        acquisition: Acquisition::Manual {
            guidance: vec![
                t!("models.ssd.manual_required").to_string(),
                t!("models.ssd.manual_hint", dir = "models/ssd/").to_string(),
            ],
        },
        models: vec![
            ModelEntry::new(
                "ssd_mobilenet_v2_coco.pb",
                format!("{}/ssd_mobilenet_v2_coco_2018_03_29.tar.gz", MODEL_ZOO_URL),
            ),
            ModelEntry::new(
                "ssd_inception_v2_coco.pb",
                format!("{}/ssd_inception_v2_coco_2018_01_28.tar.gz", MODEL_ZOO_URL),
            ),
        ],
    }
}
