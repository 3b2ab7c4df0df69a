use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pages in the corpus.
pub const PAGE_COUNT: u16 = 604;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page {0} is outside the corpus (1..=604)")]
    OutOfRange(i64),

    #[error("invalid page number: {0}")]
    InvalidNumber(String),

    #[error("page selection is missing `{0}`")]
    MissingField(&'static str),

    #[error("invalid word-by-word link: {0}")]
    InvalidLink(String),

    #[error("malformed page selection token: {0}")]
    InvalidToken(String),
}

/// A page of the corpus, always within `1..=PAGE_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u16);

impl PageNumber {
    /// Creates a `PageNumber`, rejecting values outside the corpus.
    ///
    /// # Errors
    ///
    /// Returns `PageError::OutOfRange` for values below 1 or above `PAGE_COUNT`.
    pub fn new(raw: i64) -> Result<Self, PageError> {
        match u16::try_from(raw) {
            Ok(value) if (1..=PAGE_COUNT).contains(&value) => Ok(Self(value)),
            _ => Err(PageError::OutOfRange(raw)),
        }
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| PageError::InvalidNumber(s.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Debug for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageNumber({})", self.0)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
