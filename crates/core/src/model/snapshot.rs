use std::fmt;

/// Aggregate revision progress as reported by the remote service.
///
/// The percentage is the server's value; it is displayed, never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub revised_count: u32,
    pub total_count: u32,
    pub completion_percentage: f64,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(revised_count: u32, total_count: u32, completion_percentage: f64) -> Self {
        Self {
            revised_count,
            total_count,
            completion_percentage,
        }
    }

    #[must_use]
    pub fn remaining_count(&self) -> u32 {
        self.total_count.saturating_sub(self.revised_count)
    }

    /// Percentage as text: `25` for `25.0`, `24.8` otherwise.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        PercentageLabel(self.completion_percentage).to_string()
    }

    /// Width for a progress bar, clamped to `0..=100`.
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        if self.completion_percentage.is_nan() {
            return 0.0;
        }
        self.completion_percentage.clamp(0.0, 100.0)
    }

    /// `"151 of 604 pages completed (25%)"`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} of {} pages completed ({}%)",
            self.revised_count,
            self.total_count,
            self.percentage_label()
        )
    }
}

struct PercentageLabel(f64);

impl fmt::Display for PercentageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.fract() == 0.0 {
            write!(f, "{value:.0}")
        } else {
            let rounded = (value * 10.0).round() / 10.0;
            write!(f, "{rounded}")
        }
    }
}
