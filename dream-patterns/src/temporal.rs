//! Temporal patterns: hour-of-day bucketing into named activity windows.

use chrono::Timelike;
use std::collections::{BTreeMap, BTreeSet};

use dream_core::config::DetectorConfig;
use dream_core::models::{Confidence, InteractionRecord, Pattern, PatternType};

/// Named activity windows over the 24-hour day.
pub const WINDOWS: [&str; 4] = ["morning", "afternoon", "evening", "night"];

/// Map an hour of day to its window label.
pub fn window_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "morning",
        12..=17 => "afternoon",
        18..=22 => "evening",
        _ => "night",
    }
}

/// Detect windows the user is consistently active in.
///
/// Consistency for a window is the number of distinct days with activity
/// in that window divided by the number of distinct days in the whole
/// batch: a user who shows up in the morning on every day the batch
/// covers scores 1.0 there. Windows above the configured threshold emit
/// a pattern with confidence equal to the ratio.
pub fn detect(batch: &[InteractionRecord], config: &DetectorConfig) -> Vec<Pattern> {
    let mut by_window: BTreeMap<&'static str, Vec<&InteractionRecord>> = BTreeMap::new();
    let mut all_days: BTreeSet<chrono::NaiveDate> = BTreeSet::new();

    for record in batch {
        let window = window_for_hour(record.timestamp.hour());
        by_window.entry(window).or_default().push(record);
        all_days.insert(record.timestamp.date_naive());
    }

    if all_days.is_empty() {
        return Vec::new();
    }

    let mut patterns = Vec::new();
    for (window, records) in &by_window {
        let active_days: BTreeSet<chrono::NaiveDate> = records
            .iter()
            .map(|r| r.timestamp.date_naive())
            .collect();
        let consistency = active_days.len() as f64 / all_days.len() as f64;

        if consistency > config.temporal_consistency_threshold {
            patterns.push(Pattern {
                pattern_type: PatternType::Temporal,
                description: format!("Consistently active during {window} hours"),
                confidence: Confidence::new(consistency),
                frequency: records.len() as u32,
                window: window.to_string(),
                evidence: records.iter().map(|r| r.id.clone()).collect(),
            });
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record_at(day: u32, hour: u32) -> InteractionRecord {
        let mut r = InteractionRecord::new("creator", "hello there", "neutral", "chat");
        r.timestamp = Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap();
        r
    }

    #[test]
    fn window_boundaries() {
        assert_eq!(window_for_hour(5), "morning");
        assert_eq!(window_for_hour(11), "morning");
        assert_eq!(window_for_hour(12), "afternoon");
        assert_eq!(window_for_hour(18), "evening");
        assert_eq!(window_for_hour(23), "night");
        assert_eq!(window_for_hour(3), "night");
    }

    #[test]
    fn every_day_morning_activity_scores_full_consistency() {
        // Ten interactions, all at 09:00, across five distinct days.
        let batch: Vec<_> = (1..=5)
            .flat_map(|day| [record_at(day, 9), record_at(day, 9)])
            .collect();
        let patterns = detect(&batch, &DetectorConfig::default());
        assert_eq!(patterns.len(), 1);
        let p = &patterns[0];
        assert_eq!(p.window, "morning");
        assert!((p.confidence.value() - 1.0).abs() < 1e-9);
        assert_eq!(p.frequency, 10);
        assert_eq!(p.evidence.len(), 10);
    }

    #[test]
    fn scattered_activity_emits_nothing() {
        // One record per window across four days: 0.25 consistency each.
        let batch = vec![
            record_at(1, 9),
            record_at(2, 14),
            record_at(3, 20),
            record_at(4, 2),
        ];
        let patterns = detect(&batch, &DetectorConfig::default());
        assert!(patterns.is_empty());
    }
}
