//! Display tiers derived from the completion percentage.
//!
//! Both tier functions are total over `f64`: anything below the lowest
//! threshold (including NaN and negative values) lands in the bottom tier.

/// Color used for the percentage figure and progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    Success,
    Primary,
    Neutral,
    Warning,
}

impl ColorTier {
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Success
        } else if percentage >= 75.0 {
            Self::Primary
        } else if percentage >= 50.0 {
            Self::Neutral
        } else {
            Self::Warning
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
        }
    }
}

/// Encouragement shown under the progress statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTier {
    Complete,
    AlmostThere,
    Halfway,
    GoodStart,
    Beginning,
}

impl MessageTier {
    /// Thresholds evaluated high to low; the first match wins.
    const THRESHOLDS: [(f64, Self); 4] = [
        (100.0, Self::Complete),
        (75.0, Self::AlmostThere),
        (50.0, Self::Halfway),
        (25.0, Self::GoodStart),
    ];

    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map_or(Self::Beginning, |(_, tier)| *tier)
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Complete => "Congratulations! You've completed the entire Quran!",
            Self::AlmostThere => "Excellent progress! You're almost there!",
            Self::Halfway => "Great job! You're halfway through!",
            Self::GoodStart => "Good start! Keep going!",
            Self::Beginning => "Every journey begins with a single step. Keep it up!",
        }
    }
}
