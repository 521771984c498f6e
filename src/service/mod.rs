pub mod configs;
pub mod directories;
pub mod models;
pub mod setup;

pub use configs::write_config_files;
pub use directories::create_directories;
pub use models::ModelSetDriver;
pub use setup::SetupService;
