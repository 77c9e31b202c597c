//! Templated wisdom paragraph.

use std::collections::BTreeMap;

use dream_core::models::{Hypothesis, HypothesisCategory};

/// Compose the report's wisdom paragraph from the cycle's hypotheses.
///
/// Names the dominant category and quotes the strongest statement; with
/// nothing to draw on it falls back to a neutral line.
pub fn wisdom_paragraph(hypotheses: &[Hypothesis]) -> String {
    if hypotheses.is_empty() {
        return "No clear signal emerged this cycle; more interactions will sharpen the picture."
            .to_string();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for h in hypotheses {
        *counts.entry(category_label(h.category)).or_default() += 1;
    }
    // BTreeMap iteration breaks count ties alphabetically, keeping the
    // paragraph deterministic.
    let (dominant, dominant_count) = counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(label, count)| (*label, *count))
        .unwrap_or(("behavioral", 0));

    let strongest = hypotheses
        .iter()
        .max_by(|a, b| a.confidence.value().total_cmp(&b.confidence.value()));

    match strongest {
        Some(top) => format!(
            "This cycle leaned {} ({} of {} hypotheses). The strongest thread: {} (confidence {}).",
            dominant,
            dominant_count,
            hypotheses.len(),
            top.statement,
            top.confidence
        ),
        None => "No clear signal emerged this cycle; more interactions will sharpen the picture."
            .to_string(),
    }
}

fn category_label(category: HypothesisCategory) -> &'static str {
    match category {
        HypothesisCategory::Behavioral => "behavioral",
        HypothesisCategory::Emotional => "emotional",
        HypothesisCategory::Cognitive => "cognitive",
    }
}
