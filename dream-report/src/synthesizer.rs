//! Assembles the morning report from a cycle's outputs.

use chrono::{NaiveDate, Utc};
use tracing::info;

use dream_core::models::{
    Conflict, CycleMetrics, EvolutionSummary, HeritageDna, Hypothesis, MorningReport, Pattern,
};

use crate::quality::quality_score;
use crate::recommendations::recommendations;
use crate::wisdom::wisdom_paragraph;

const MAX_INSIGHTS: usize = 3;

/// Everything a finished cycle hands to the synthesizer.
#[derive(Debug, Clone, Default)]
pub struct CycleOutcome {
    pub patterns: Vec<Pattern>,
    /// Hypotheses created, reinforced, or confidence-adjusted this cycle;
    /// untouched rows stay out of the report.
    pub hypotheses: Vec<Hypothesis>,
    pub conflicts: Vec<Conflict>,
    pub evolution: EvolutionSummary,
    pub dna: Option<HeritageDna>,
    pub metrics: CycleMetrics,
}

/// Stateless report builder. Synthesis is total: every input shape,
/// including a completely empty cycle, produces a well-formed report.
#[derive(Debug, Default)]
pub struct ReportSynthesizer;

impl ReportSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(
        &self,
        user_id: &str,
        date: NaiveDate,
        outcome: CycleOutcome,
    ) -> MorningReport {
        let quality = quality_score(outcome.dna.as_ref(), &outcome.hypotheses);

        let mut ranked: Vec<&Hypothesis> = outcome.hypotheses.iter().collect();
        ranked.sort_by(|a, b| b.confidence.value().total_cmp(&a.confidence.value()));
        let insights: Vec<String> = ranked
            .iter()
            .take(MAX_INSIGHTS)
            .map(|h| h.statement.clone())
            .collect();

        let report = MorningReport {
            user_id: user_id.to_string(),
            date,
            wisdom: wisdom_paragraph(&outcome.hypotheses),
            recommendations: recommendations(&outcome.patterns),
            insights,
            quality_score: quality,
            hypotheses: outcome.hypotheses,
            patterns: outcome.patterns,
            conflicts: outcome.conflicts,
            evolution: outcome.evolution,
            metrics: outcome.metrics,
            generated_at: Utc::now(),
        };

        info!(
            user_id,
            %date,
            quality = %report.quality_score,
            hypotheses = report.hypotheses.len(),
            conflicts = report.conflicts.len(),
            "morning report synthesized"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_core::models::{Confidence, HypothesisCategory};

    #[test]
    fn empty_cycle_still_produces_a_full_report() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let report = ReportSynthesizer::new().synthesize("creator", date, CycleOutcome::default());

        assert_eq!(report.user_id, "creator");
        assert_eq!(report.date, date);
        assert!(report.insights.is_empty());
        assert!(!report.recommendations.is_empty());
        assert!(report.wisdom.contains("No clear signal"));
        assert!((report.quality_score.value() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn insights_are_the_strongest_statements_in_order() {
        let mk = |statement: &str, confidence: f64| {
            Hypothesis::new(
                "creator",
                statement,
                HypothesisCategory::Behavioral,
                Confidence::new(confidence),
            )
        };
        let outcome = CycleOutcome {
            hypotheses: vec![
                mk("User's communication style leans direct", 0.6),
                mk("User is most active during morning hours", 0.95),
                mk("User tends toward deliberate decisions", 0.7),
                mk("User shows a recurring joy emotional tone", 0.5),
            ],
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let report = ReportSynthesizer::new().synthesize("creator", date, outcome);

        assert_eq!(report.insights.len(), 3);
        assert!(report.insights[0].contains("morning"));
        assert!(report.insights[1].contains("deliberate"));
        assert!(report.insights[2].contains("direct"));
    }
}
