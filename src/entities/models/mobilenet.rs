use super::{Acquisition, ModelFamily};
use rust_i18n::t;

pub fn family() -> ModelFamily {
    ModelFamily {
        id: "mobilenet".to_string(),
        display_name: "MobileNet".to_string(),
        directory: "models/mobilenet".to_string(),
        acquisition: Acquisition::Manual {
            guidance: vec![
                t!("models.mobilenet.tensorflow_hub").to_string(),
                t!("models.mobilenet.auto_download").to_string(),
            ],
        },
        models: Vec::new(),
    }
}
