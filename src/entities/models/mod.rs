pub mod family;
pub mod mobilenet;
pub mod model;
pub mod ssd;
pub mod yolo;

pub use family::{Acquisition, ModelFamily};
pub use model::ModelEntry;

/// 内置的模型家族，按执行顺序排列
pub fn default_families() -> Vec<ModelFamily> {
    vec![yolo::family(), ssd::family(), mobilenet::family()]
}
