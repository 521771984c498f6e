pub mod config_document;
pub mod models;
pub mod report;

pub use config_document::ConfigDocument;
pub use models::{Acquisition, ModelEntry, ModelFamily};
pub use report::{DownloadOutcome, FamilyReport, ModelOutcome, SetupReport};
