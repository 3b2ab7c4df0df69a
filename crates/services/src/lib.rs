#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod generation;
pub mod remote;
pub mod session;

pub use app_services::AppServices;
pub use config::RemoteConfig;
pub use error::{ConfigError, ErrorKind, RemoteError};
pub use generation::{GenerationTrigger, PageGenerationFlow};
pub use remote::{GENERATION_FAILED_MESSAGE, HttpRevisionApi, RevisionApi};
pub use session::{GenerationReport, ProgressRefresh, SessionCoordinator};
