use revision_core::model::{GenerationOutcome, PageNumber, PageSelection, ProgressSnapshot};
use serde::Deserialize;
use url::Url;

use crate::error::RemoteError;
use crate::remote::GENERATION_REFUSED_MESSAGE;

/// Body of `POST /generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponse {
    pub success: bool,
    pub message: Option<String>,
    pub page_num: Option<i64>,
    pub surah_titles: Option<String>,
    pub image_url: Option<String>,
    pub wbw_link: Option<String>,
}

impl GenerateResponse {
    /// A refusal (`success: false`) is a normal outcome; an incomplete
    /// success is a protocol error.
    pub fn into_outcome(self) -> Result<GenerationOutcome, RemoteError> {
        if !self.success {
            let message = self
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERATION_REFUSED_MESSAGE.to_string());
            return Ok(GenerationOutcome::Failure { message });
        }

        let page_num = self
            .page_num
            .ok_or_else(|| RemoteError::Protocol("missing pageNum".into()))?;
        let page_number =
            PageNumber::new(page_num).map_err(|err| RemoteError::Protocol(err.to_string()))?;
        let image_url = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| RemoteError::Protocol("missing imageUrl".into()))?;
        let wbw_link = match self.wbw_link.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                Url::parse(raw)
                    .map_err(|err| RemoteError::Protocol(format!("invalid wbwLink: {err}")))?,
            ),
        };

        let selection = PageSelection::new(
            page_number,
            self.surah_titles.unwrap_or_default(),
            image_url,
            wbw_link,
        )
        .map_err(|err| RemoteError::Protocol(err.to_string()))?;

        Ok(GenerationOutcome::Success(selection))
    }
}

/// Body of `GET /progress`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProgressResponse {
    pub revised: u32,
    pub total: u32,
    pub percentage: f64,
}

impl From<ProgressResponse> for ProgressSnapshot {
    fn from(body: ProgressResponse) -> Self {
        ProgressSnapshot::new(body.revised, body.total, body.percentage)
    }
}
