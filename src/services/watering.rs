//! Watering-schedule analysis.
//!
//! Detects when a user's actual watering behavior differs significantly from
//! their configured schedule, using IQR-based outlier detection to filter
//! out irregular events (vacations, forgotten waterings) before recommending
//! a new interval.

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::event::{sort_most_recent_first, WateringEvent};
use crate::models::suggestion::{AnalyzerPolicy, ScheduleAnalysisResult, SuggestionDraft};
use crate::services::stats;

/// Minimum intervals that must survive outlier filtering before the median
/// is trusted as a signal.
const MIN_FILTERED_INTERVALS: usize = 3;

fn validate_inputs(current_schedule_days: u32, policy: &AnalyzerPolicy) -> AnalysisResult<()> {
    if current_schedule_days == 0 {
        return Err(AnalysisError::invalid_parameter(
            "current_schedule_days",
            "must be positive",
        ));
    }
    if policy.min_events_required == 0 {
        return Err(AnalysisError::invalid_parameter(
            "min_events_required",
            "must be positive",
        ));
    }
    if policy.significant_difference_days == 0 {
        return Err(AnalysisError::invalid_parameter(
            "significant_difference_days",
            "must be positive",
        ));
    }
    if policy.min_interval_days == 0 {
        return Err(AnalysisError::invalid_policy("min_interval_days must be positive"));
    }
    if policy.min_interval_days > policy.max_interval_days {
        return Err(AnalysisError::invalid_policy(format!(
            "min_interval_days ({}) exceeds max_interval_days ({})",
            policy.min_interval_days, policy.max_interval_days
        )));
    }
    Ok(())
}

/// Analyze a plant's watering history against its configured schedule.
///
/// Events may arrive in any order; they are sorted most-recent-first at the
/// boundary before adjacent pairs are differenced, so callers fetching rows
/// in ascending date order cannot silently corrupt the intervals.
///
/// The computation is pure and deterministic: no wall-clock reads, no I/O,
/// only relative day differences between the supplied timestamps matter.
/// Insufficient history is a normal "no suggestion" result, not an error;
/// [`AnalysisError`] is returned only for non-positive parameters or a
/// degenerate policy.
pub fn analyze_watering_schedule(
    events: &[WateringEvent],
    current_schedule_days: u32,
    policy: &AnalyzerPolicy,
) -> AnalysisResult<ScheduleAnalysisResult> {
    validate_inputs(current_schedule_days, policy)?;

    // Need enough events to detect a pattern
    if events.len() < policy.min_events_required {
        return Ok(ScheduleAnalysisResult::insufficient_data());
    }

    let mut ordered = events.to_vec();
    sort_most_recent_first(&mut ordered);

    // Intervals between consecutive waterings, keeping only routine gaps.
    // Zero-day gaps are duplicate logs; gaps beyond the cap are hiatuses.
    let intervals: Vec<f64> = ordered
        .windows(2)
        .filter_map(|pair| {
            let days = pair[0].days_between(&pair[1]);
            if days >= policy.min_interval_days as i64 && days <= policy.max_interval_days as i64 {
                Some(days as f64)
            } else {
                None
            }
        })
        .collect();

    // Need enough valid intervals
    if intervals.len() < policy.min_events_required - 1 {
        return Ok(ScheduleAnalysisResult::no_suggestion(None, intervals.len()));
    }

    let filtered = stats::remove_outliers_iqr(&intervals, policy.iqr_multiplier);
    log::debug!(
        "interval extraction: {} raw, {} valid, {} after outlier removal",
        events.len().saturating_sub(1),
        intervals.len(),
        filtered.len()
    );

    // Need enough data points after outlier removal. The median is withheld
    // here: too little survived filtering to trust the signal.
    if filtered.len() < MIN_FILTERED_INTERVALS {
        return Ok(ScheduleAnalysisResult::no_suggestion(None, filtered.len()));
    }

    let median_days = stats::median(&filtered).round() as u32;
    let difference = median_days.abs_diff(current_schedule_days);

    if difference >= policy.significant_difference_days {
        let confidence = confidence_score(&filtered, policy);
        return Ok(ScheduleAnalysisResult {
            should_suggest: true,
            suggested_days: Some(median_days),
            confidence,
            detected_median_interval: Some(median_days),
            data_points_used: filtered.len(),
        });
    }

    // No significant difference - schedule matches behavior. The median is
    // still reported for display.
    Ok(ScheduleAnalysisResult::no_suggestion(
        Some(median_days),
        filtered.len(),
    ))
}

/// Confidence 0-100 from the consistency of the filtered intervals.
///
/// Starts at 100, penalized per day of standard deviation, with a bonus for
/// larger samples, clamped to the 0-100 band. A standard deviation of about
/// 12.5 days alone zeroes the score under the default penalty.
fn confidence_score(filtered: &[f64], policy: &AnalyzerPolicy) -> u8 {
    let std_dev = stats::std_deviation(filtered);
    let data_point_bonus = filtered.len().min(policy.data_point_bonus_cap) as f64;
    let raw = 100.0 - std_dev * policy.std_dev_penalty + data_point_bonus;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Format a schedule suggestion as a user-friendly message.
///
/// Wording is tiered by confidence: assertive at or above
/// `policy.assertive_confidence`, moderate at or above
/// `policy.moderate_confidence`, hedged below that.
pub fn format_schedule_suggestion(
    current_days: u32,
    suggested_days: u32,
    confidence: u8,
    policy: &AnalyzerPolicy,
) -> String {
    let direction = if suggested_days < current_days {
        "more often"
    } else {
        "less often"
    };

    if confidence >= policy.assertive_confidence {
        format!(
            "You consistently water {direction} than your {current_days}-day schedule. \
             Consider changing to every {suggested_days} days."
        )
    } else if confidence >= policy.moderate_confidence {
        format!(
            "Your watering pattern suggests every {suggested_days} days might work better \
             than {current_days} days."
        )
    } else {
        format!(
            "You might prefer watering every {suggested_days} days instead of \
             {current_days} days, but your pattern varies."
        )
    }
}

/// Run the analysis and, when it suggests a change, draft the value object
/// the caller persists as a suggestion row.
///
/// De-duplication against an existing active suggestion and cooldown policy
/// stay with the caller; this only packages the analyzer's output.
pub fn draft_schedule_suggestion(
    events: &[WateringEvent],
    current_schedule_days: u32,
    policy: &AnalyzerPolicy,
) -> AnalysisResult<Option<SuggestionDraft>> {
    let analysis = analyze_watering_schedule(events, current_schedule_days, policy)?;

    let Some(suggested_days) = analysis.suggested_days else {
        return Ok(None);
    };
    if !analysis.should_suggest {
        return Ok(None);
    }

    let message = format_schedule_suggestion(
        current_schedule_days,
        suggested_days,
        analysis.confidence,
        policy,
    );

    Ok(Some(SuggestionDraft {
        suggested_interval_days: suggested_days,
        current_interval_days: current_schedule_days,
        confidence_score: analysis.confidence,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    /// Most-recent-first events separated by the given day gaps.
    /// `gaps[0]` is the gap between the newest and second-newest event.
    fn events_with_gaps(gaps: &[i64]) -> Vec<WateringEvent> {
        let newest = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut events = vec![WateringEvent::new(newest)];
        let mut cursor = newest;
        for gap in gaps {
            cursor -= Duration::days(*gap);
            events.push(WateringEvent::new(cursor));
        }
        events
    }

    #[test]
    fn test_too_few_events_returns_zeroed_result() {
        let events = events_with_gaps(&[7, 7]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();
        assert_eq!(result, ScheduleAnalysisResult::insufficient_data());
    }

    #[test]
    fn test_consistent_ten_day_pattern_suggests_change() {
        let events = events_with_gaps(&[10, 10, 10, 10, 10]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(result.should_suggest);
        assert_eq!(result.suggested_days, Some(10));
        assert_eq!(result.detected_median_interval, Some(10));
        assert_eq!(result.data_points_used, 5);
        // stddev 0 and a +5 bonus push the raw score past 100; clamped
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_matching_schedule_reports_median_without_suggestion() {
        let events = events_with_gaps(&[7, 7, 7, 7]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.suggested_days, None);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.detected_median_interval, Some(7));
        assert_eq!(result.data_points_used, 4);
    }

    #[test]
    fn test_one_day_difference_is_not_significant() {
        let events = events_with_gaps(&[8, 8, 8, 8]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.detected_median_interval, Some(8));
    }

    #[test]
    fn test_hiatus_gap_excluded_before_filtering() {
        // The 120-day gap is outside the [1, 90] band, so it never reaches
        // the IQR step; the rest still support the 10-day median.
        let events = events_with_gaps(&[10, 10, 120, 10, 10, 10]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(result.should_suggest);
        assert_eq!(result.suggested_days, Some(10));
        assert_eq!(result.data_points_used, 5);
    }

    #[test]
    fn test_same_day_duplicates_excluded() {
        let events = events_with_gaps(&[7, 0, 7, 7, 7, 7]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.detected_median_interval, Some(7));
        assert_eq!(result.data_points_used, 5);
    }

    #[test]
    fn test_too_few_valid_intervals_reports_count() {
        // 5 events but three 120-day hiatuses leave only 1 valid interval
        let events = events_with_gaps(&[7, 120, 120, 120]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.detected_median_interval, None);
        assert_eq!(result.data_points_used, 1);
    }

    #[test]
    fn test_vacation_gap_with_spread_is_filtered_out() {
        // Sorted intervals [6, 7, 7, 8, 8, 45]: fence [5.5, 9.5] drops 45
        let events = events_with_gaps(&[6, 7, 8, 7, 45, 8]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.detected_median_interval, Some(7));
        assert_eq!(result.data_points_used, 5);
    }

    #[test]
    fn test_zero_iqr_keeps_all_intervals() {
        // Identical intervals collapse the IQR fence; filtering is a no-op
        // and the extreme 45-day gap survives into the median.
        let events = events_with_gaps(&[7, 7, 7, 7, 7, 45]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(!result.should_suggest);
        assert_eq!(result.detected_median_interval, Some(7));
        assert_eq!(result.data_points_used, 6);
    }

    #[test]
    fn test_small_sample_skips_outlier_filtering() {
        // 4 events -> 3 intervals, below the IQR minimum: the 60-day gap is
        // kept in the sample instead of being filtered.
        let policy = AnalyzerPolicy {
            min_events_required: 4,
            ..Default::default()
        };
        let events = events_with_gaps(&[7, 7, 60]);
        let result = analyze_watering_schedule(&events, 7, &policy).unwrap();

        assert_eq!(result.data_points_used, 3);
        assert_eq!(result.detected_median_interval, Some(7));
    }

    #[test]
    fn test_order_insensitive_after_boundary_sort() {
        let events = events_with_gaps(&[10, 9, 11, 10, 10]);
        let mut reversed = events.clone();
        reversed.reverse();

        let policy = AnalyzerPolicy::default();
        let forward = analyze_watering_schedule(&events, 7, &policy).unwrap();
        let backward = analyze_watering_schedule(&reversed, 7, &policy).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let events = events_with_gaps(&[9, 11, 10, 12, 8, 10]);
        let policy = AnalyzerPolicy::default();
        let first = analyze_watering_schedule(&events, 7, &policy).unwrap();
        let second = analyze_watering_schedule(&events, 7, &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_confidence_stays_in_band_with_noisy_intervals() {
        // Wildly varying intervals: stddev alone would push the raw score
        // far below zero, so the clamp must hold.
        let events = events_with_gaps(&[2, 40, 3, 55, 5, 70, 2]);
        let result =
            analyze_watering_schedule(&events, 7, &AnalyzerPolicy::default()).unwrap();

        assert!(result.confidence <= 100);
        if result.should_suggest {
            assert!(result.suggested_days.is_some());
        } else {
            assert_eq!(result.suggested_days, None);
        }
    }

    #[test]
    fn test_zero_schedule_days_rejected() {
        let events = events_with_gaps(&[7, 7, 7, 7]);
        let err = analyze_watering_schedule(&events, 0, &AnalyzerPolicy::default());
        assert!(matches!(
            err,
            Err(AnalysisError::InvalidParameter { name: "current_schedule_days", .. })
        ));
    }

    #[test]
    fn test_degenerate_policy_rejected() {
        let events = events_with_gaps(&[7, 7, 7, 7]);

        let zero_min_events = AnalyzerPolicy {
            min_events_required: 0,
            ..Default::default()
        };
        assert!(analyze_watering_schedule(&events, 7, &zero_min_events).is_err());

        let inverted_band = AnalyzerPolicy {
            min_interval_days: 10,
            max_interval_days: 5,
            ..Default::default()
        };
        assert!(matches!(
            analyze_watering_schedule(&events, 7, &inverted_band),
            Err(AnalysisError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_format_suggestion_assertive() {
        let msg = format_schedule_suggestion(7, 10, 85, &AnalyzerPolicy::default());
        assert_eq!(
            msg,
            "You consistently water less often than your 7-day schedule. \
             Consider changing to every 10 days."
        );
    }

    #[test]
    fn test_format_suggestion_moderate() {
        let msg = format_schedule_suggestion(7, 10, 65, &AnalyzerPolicy::default());
        assert_eq!(
            msg,
            "Your watering pattern suggests every 10 days might work better than 7 days."
        );
    }

    #[test]
    fn test_format_suggestion_hedged() {
        let msg = format_schedule_suggestion(7, 10, 40, &AnalyzerPolicy::default());
        assert_eq!(
            msg,
            "You might prefer watering every 10 days instead of 7 days, \
             but your pattern varies."
        );
    }

    #[test]
    fn test_format_suggestion_tier_boundaries_take_higher_tier() {
        let policy = AnalyzerPolicy::default();
        assert!(format_schedule_suggestion(7, 10, 80, &policy).starts_with("You consistently"));
        assert!(format_schedule_suggestion(7, 10, 79, &policy).starts_with("Your watering"));
        assert!(format_schedule_suggestion(7, 10, 60, &policy).starts_with("Your watering"));
        assert!(format_schedule_suggestion(7, 10, 59, &policy).starts_with("You might prefer"));
    }

    #[test]
    fn test_format_suggestion_direction() {
        let policy = AnalyzerPolicy::default();
        let msg = format_schedule_suggestion(10, 7, 90, &policy);
        assert!(msg.contains("more often"));
        let msg = format_schedule_suggestion(7, 10, 90, &policy);
        assert!(msg.contains("less often"));
    }

    #[test]
    fn test_draft_present_iff_suggesting() {
        let policy = AnalyzerPolicy::default();

        let drifting = events_with_gaps(&[10, 10, 10, 10, 10]);
        let draft = draft_schedule_suggestion(&drifting, 7, &policy)
            .unwrap()
            .expect("drifting cadence should produce a draft");
        assert_eq!(draft.suggested_interval_days, 10);
        assert_eq!(draft.current_interval_days, 7);
        assert_eq!(draft.confidence_score, 100);
        assert!(draft.message.contains("every 10 days"));

        let matching = events_with_gaps(&[7, 7, 7, 7]);
        assert!(draft_schedule_suggestion(&matching, 7, &policy)
            .unwrap()
            .is_none());
    }
}
