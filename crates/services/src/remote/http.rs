use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use revision_core::model::{GenerationOutcome, ProgressSnapshot};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::RemoteConfig;
use crate::error::{ConfigError, RemoteError};
use crate::remote::wire::{GenerateResponse, ProgressResponse};
use crate::remote::{GENERATION_FAILED_MESSAGE, RevisionApi};

/// `RevisionApi` over HTTP+JSON.
#[derive(Clone)]
pub struct HttpRevisionApi {
    client: Client,
    config: RemoteConfig,
}

impl HttpRevisionApi {
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> Url {
        self.config.resolve(path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = request.header(ACCEPT, "application/json").send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn request_generation(&self) -> Result<GenerationOutcome, RemoteError> {
        let url = self.endpoint("/generate");
        debug!(%url, "requesting page generation");
        let body: GenerateResponse = self.send_json(self.client.post(url)).await?;
        body.into_outcome()
    }
}

#[async_trait]
impl RevisionApi for HttpRevisionApi {
    async fn generate_page(&self) -> GenerationOutcome {
        match self.request_generation().await {
            Ok(outcome) => {
                if let GenerationOutcome::Failure { message } = &outcome {
                    debug!(%message, "service refused page generation");
                }
                outcome
            }
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "page generation failed");
                GenerationOutcome::failure(GENERATION_FAILED_MESSAGE)
            }
        }
    }

    async fn fetch_progress(&self) -> Result<ProgressSnapshot, RemoteError> {
        let url = self.endpoint("/progress");
        debug!(%url, "fetching progress");
        let body: ProgressResponse = self
            .send_json(self.client.get(url))
            .await
            .inspect_err(|err| warn!(kind = %err.kind(), error = %err, "progress fetch failed"))?;
        Ok(body.into())
    }

    fn resolve_image_url(&self, reference: &str) -> Url {
        self.config.resolve(reference)
    }
}
