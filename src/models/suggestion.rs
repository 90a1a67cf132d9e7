use serde::{Deserialize, Serialize};

/// Tunable policy knobs for the watering-schedule analyzer.
///
/// The defaults reproduce the production decision policy exactly; they are
/// exposed as fields rather than hard-coded literals so deployments can tune
/// them without a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerPolicy {
    /// Minimum raw events before any inference is attempted.
    pub min_events_required: usize,
    /// Minimum absolute gap (days) between detected median and current
    /// schedule required to trigger a suggestion.
    pub significant_difference_days: u32,
    /// Shortest interval counted as a real watering gap. Anything below is
    /// treated as a same-day duplicate log.
    pub min_interval_days: u32,
    /// Longest interval counted as routine behavior. Longer gaps are
    /// discarded outright as hiatuses rather than merely outlying.
    pub max_interval_days: u32,
    /// IQR fence multiplier for outlier removal.
    pub iqr_multiplier: f64,
    /// Confidence penalty per day of standard deviation.
    pub std_dev_penalty: f64,
    /// Cap on the sample-size confidence bonus.
    pub data_point_bonus_cap: usize,
    /// Confidence at or above which suggestion wording is assertive.
    pub assertive_confidence: u8,
    /// Confidence at or above which suggestion wording is moderate.
    pub moderate_confidence: u8,
}

impl Default for AnalyzerPolicy {
    fn default() -> Self {
        Self {
            min_events_required: 5,
            significant_difference_days: 2,
            min_interval_days: 1,
            max_interval_days: 90,
            iqr_multiplier: 1.5,
            std_dev_penalty: 8.0,
            data_point_bonus_cap: 10,
            assertive_confidence: 80,
            moderate_confidence: 60,
        }
    }
}

/// Result of analyzing a plant's watering history against its schedule.
///
/// A "no suggestion" result is a normal outcome, not a failure; the
/// diagnostic fields explain why inference was skipped or declined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAnalysisResult {
    /// Whether a schedule adjustment should be suggested.
    pub should_suggest: bool,
    /// The suggested new interval in days (None if no suggestion).
    pub suggested_days: Option<u32>,
    /// Confidence score 0-100 based on consistency of the watering pattern.
    pub confidence: u8,
    /// The median interval detected from user behavior after outlier
    /// removal, reported even when no suggestion is made.
    pub detected_median_interval: Option<u32>,
    /// Number of intervals retained after outlier removal.
    pub data_points_used: usize,
}

impl ScheduleAnalysisResult {
    /// The zeroed "no suggestion" result returned when there is not enough
    /// data to run inference at all.
    pub fn insufficient_data() -> Self {
        Self::no_suggestion(None, 0)
    }

    /// A "no suggestion" result carrying diagnostic counts.
    pub fn no_suggestion(detected_median_interval: Option<u32>, data_points_used: usize) -> Self {
        Self {
            should_suggest: false,
            suggested_days: None,
            confidence: 0,
            detected_median_interval,
            data_points_used,
        }
    }
}

/// A suggestion ready for the caller to persist as a suggestion row.
///
/// The analyzer only drafts the value object; de-duplication, cooldown, and
/// storage policy belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionDraft {
    /// Proposed watering interval in days.
    pub suggested_interval_days: u32,
    /// The interval that was configured when the suggestion was drafted.
    pub current_interval_days: u32,
    /// Confidence score 0-100 carried over from the analysis.
    pub confidence_score: u8,
    /// Human-readable explanation, tiered by confidence.
    pub message: String,
}
