//! Balance Badges
//!
//! Presentation of the server's nutritional balance analysis.

use crate::models::{BalanceAnalysis, BalanceLevel};

pub fn icon(level: BalanceLevel) -> &'static str {
    match level {
        BalanceLevel::Balanced => "✓",
        BalanceLevel::Average => "○",
        BalanceLevel::Unbalanced => "✗",
        BalanceLevel::Empty => "−",
        BalanceLevel::Unknown => "?",
    }
}

/// CSS modifier class of the badge
pub fn level_class(level: BalanceLevel) -> &'static str {
    match level {
        BalanceLevel::Balanced => "balanced",
        BalanceLevel::Average => "average",
        BalanceLevel::Unbalanced => "unbalanced",
        BalanceLevel::Empty => "empty",
        BalanceLevel::Unknown => "unknown",
    }
}

/// Plain-text summary, used as the badge's accessible title
pub fn summary_text(analysis: &BalanceAnalysis) -> String {
    let mut text = format!("{}\n", analysis.message);
    if !analysis.categories.is_empty() {
        text.push_str("\nPresent:\n");
        for cat in &analysis.categories {
            text.push_str(&format!("• {}\n", cat));
        }
    }
    if !analysis.missing.is_empty() {
        text.push_str("\nMissing:\n");
        for cat in &analysis.missing {
            text.push_str(&format!("• {}\n", cat));
        }
    }
    text
}

/// Fixed-position tooltip anchor: centered under the badge, 10px below
pub fn tooltip_anchor(left: f64, width: f64, bottom: f64) -> (f64, f64) {
    (left + width / 2.0, bottom + 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(categories: &[&str], missing: &[&str]) -> BalanceAnalysis {
        BalanceAnalysis {
            level: BalanceLevel::Average,
            message: "Fairly balanced".to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon(BalanceLevel::Balanced), "✓");
        assert_eq!(icon(BalanceLevel::Empty), "−");
        assert_eq!(icon(BalanceLevel::Unknown), "?");
        assert_eq!(level_class(BalanceLevel::Unbalanced), "unbalanced");
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(
            summary_text(&analysis(&["Vegetables", "Meat"], &["Grains & Starches"])),
            "Fairly balanced\n\nPresent:\n• Vegetables\n• Meat\n\nMissing:\n• Grains & Starches\n"
        );
        assert_eq!(summary_text(&analysis(&[], &[])), "Fairly balanced\n");
    }

    #[test]
    fn test_tooltip_anchor() {
        assert_eq!(tooltip_anchor(100.0, 40.0, 220.0), (120.0, 230.0));
    }
}
