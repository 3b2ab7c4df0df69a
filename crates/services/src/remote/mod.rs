//! Access to the remote revision service.

mod http;
mod wire;

use async_trait::async_trait;
use revision_core::model::{GenerationOutcome, ProgressSnapshot};
use url::Url;

use crate::error::RemoteError;

pub use http::HttpRevisionApi;

/// Shown when generation fails for any reason other than a server refusal.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate page. Please check your connection.";
/// Shown when the server refuses a generation without saying why.
pub const GENERATION_REFUSED_MESSAGE: &str = "Failed to generate page";

/// The three operations the client needs from the remote service.
///
/// One instance is built at startup and shared as `Arc<dyn RevisionApi>`.
#[async_trait]
pub trait RevisionApi: Send + Sync {
    /// Ask the service to pick the next page.
    ///
    /// The service treats every call as a new pick, so callers must not
    /// retry it behind the user's back. Failures come back as
    /// `GenerationOutcome::Failure` rather than as errors.
    async fn generate_page(&self) -> GenerationOutcome;

    /// Read the current revision progress. Safe to repeat.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` with `ErrorKind::Network` when no usable response
    /// arrives, or `ErrorKind::Protocol` when the payload does not decode.
    async fn fetch_progress(&self) -> Result<ProgressSnapshot, RemoteError>;

    /// Absolute address of a page image. Pure; performs no I/O.
    fn resolve_image_url(&self, reference: &str) -> Url;
}
