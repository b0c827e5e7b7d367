//! Formatting helpers shared by the TUI and console renderers.

/// Turn a model key into a display name.
///
/// Separators (`_` and `-`) become spaces and each word is capitalized:
/// `"random_forest"` → `"Random Forest"`.
pub fn display_model_name(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a [0, 1] fraction as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Confidence as distance from uncertainty.
///
/// `probability` if above 0.5, otherwise `1 - probability`: a model at
/// 0.2 is as committed to its negative verdict as one at 0.8 is to its
/// positive one. This mirrors agreement strength, not a calibrated score.
pub fn confidence(probability: f64) -> f64 {
    if probability > 0.5 {
        probability
    } else {
        1.0 - probability
    }
}
