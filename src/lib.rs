//! Vision Setup
//!
//! Bootstraps the local workspace of an object-detection project.
//!
//! # Modules
//! - `entities`: Model families, config documents and run reports
//! - `error`: Error types shared by every step
//! - `service`: Directory initializer, model-set drivers, config writer and the setup pipeline
//! - `utils`: Setup configuration, logging init, HTTP downloader and progress display
//!
//! # Examples
//! ```rust,no_run
//! use vision_setup::service::SetupService;
//! use vision_setup::utils::SetupConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let service = SetupService::from_config(".", SetupConfig::default())?;
//!     let report = service.run().await?;
//!     println!("{} config files written", report.config_files.len());
//!     Ok(())
//! }
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod entities;
pub mod error;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
pub use utils::*;
