use std::fmt;
use std::str::FromStr;

use url::Url;
use url::form_urlencoded;

use crate::model::{PageError, PageNumber};

const KEY_PAGE: &str = "page";
const KEY_TITLES: &str = "titles";
const KEY_IMAGE: &str = "image";
const KEY_WBW: &str = "wbw";

/// The page handed out by one successful generation.
///
/// Immutable once built. The `Display`/`FromStr` pair encodes it as a
/// hex-wrapped form-urlencoded token so it can travel as a route segment.
/// Hex digits pass through any percent-decoding the router applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    page_number: PageNumber,
    surah_titles: String,
    image_reference: String,
    word_by_word_link: Option<Url>,
}

impl PageSelection {
    /// # Errors
    ///
    /// Returns `PageError::MissingField` when the image reference is blank.
    pub fn new(
        page_number: PageNumber,
        surah_titles: impl Into<String>,
        image_reference: impl Into<String>,
        word_by_word_link: Option<Url>,
    ) -> Result<Self, PageError> {
        let image_reference = image_reference.into();
        if image_reference.trim().is_empty() {
            return Err(PageError::MissingField(KEY_IMAGE));
        }
        Ok(Self {
            page_number,
            surah_titles: surah_titles.into(),
            image_reference,
            word_by_word_link,
        })
    }

    #[must_use]
    pub fn page_number(&self) -> PageNumber {
        self.page_number
    }

    #[must_use]
    pub fn surah_titles(&self) -> &str {
        &self.surah_titles
    }

    /// Server-relative image path, e.g. `/images/42.png`.
    #[must_use]
    pub fn image_reference(&self) -> &str {
        &self.image_reference
    }

    #[must_use]
    pub fn word_by_word_link(&self) -> Option<&Url> {
        self.word_by_word_link.as_ref()
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoder = form_urlencoded::Serializer::new(String::new());
        encoder
            .append_pair(KEY_PAGE, &self.page_number.to_string())
            .append_pair(KEY_TITLES, &self.surah_titles)
            .append_pair(KEY_IMAGE, &self.image_reference);
        if let Some(link) = &self.word_by_word_link {
            encoder.append_pair(KEY_WBW, link.as_str());
        }
        f.write_str(&hex::encode(encoder.finish()))
    }
}

impl FromStr for PageSelection {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim())
            .map_err(|err| PageError::InvalidToken(err.to_string()))?;
        let pairs =
            String::from_utf8(bytes).map_err(|err| PageError::InvalidToken(err.to_string()))?;

        let mut page = None;
        let mut titles = None;
        let mut image = None;
        let mut wbw = None;

        for (key, value) in form_urlencoded::parse(pairs.as_bytes()) {
            match key.as_ref() {
                KEY_PAGE => page = Some(value.parse::<PageNumber>()?),
                KEY_TITLES => titles = Some(value.into_owned()),
                KEY_IMAGE => image = Some(value.into_owned()),
                KEY_WBW => {
                    let link = Url::parse(&value)
                        .map_err(|_| PageError::InvalidLink(value.clone().into_owned()))?;
                    wbw = Some(link);
                }
                _ => {}
            }
        }

        Self::new(
            page.ok_or(PageError::MissingField(KEY_PAGE))?,
            titles.unwrap_or_default(),
            image.ok_or(PageError::MissingField(KEY_IMAGE))?,
            wbw,
        )
    }
}
