//! Pattern type → hypothesis statement templates.
//!
//! An explicit lookup with a defined no-template fallback: an unmapped
//! pattern type is dropped (with a warning) by the manager rather than
//! crashing the stage.

use dream_core::models::{HypothesisCategory, Pattern, PatternType};

/// Lower-case the first character so a pattern description can be spliced
/// into a statement template.
fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Map a pattern to its hypothesis statement and category.
///
/// Returns `None` for a pattern type with no registered template; the
/// caller owns the drop-and-log behavior.
pub fn statement_for(pattern: &Pattern) -> Option<(String, HypothesisCategory)> {
    match pattern.pattern_type {
        PatternType::Temporal => Some((
            format!("User is most active during {} hours", pattern.window),
            HypothesisCategory::Behavioral,
        )),
        PatternType::Emotional => Some((
            format!("User shows a {}", decapitalize(&pattern.description)),
            HypothesisCategory::Emotional,
        )),
        PatternType::Communication => Some((
            format!("User's {}", decapitalize(&pattern.description)),
            HypothesisCategory::Behavioral,
        )),
        PatternType::Decision => Some((
            format!("User {}", decapitalize(&pattern.description)),
            HypothesisCategory::Cognitive,
        )),
    }
}
