//! Plain-text and JSON output for the headless commands

use crate::catalog::SurveyItem;
use crate::engine::Recommendation;
use crate::error::Result;

/// One line per recommendation: `"{rank}. {program} - {fit}% fit"`
pub fn recommendation_line(rank: usize, rec: &Recommendation) -> String {
    format!("{}. {} - {}% fit", rank, rec.program, rec.percentage_fit)
}

/// Ranked recommendations as text with a proportional bar
pub fn format_recommendations(ranked: &[Recommendation]) -> String {
    let mut out = String::new();
    for (i, rec) in ranked.iter().enumerate() {
        out.push_str(&recommendation_line(i + 1, rec));
        out.push('\n');
        let filled = crate::theme::fit_bar_width(rec.percentage_fit, 30) as usize;
        out.push_str("   ");
        out.push_str(&"#".repeat(filled));
        out.push_str(&".".repeat(30 - filled));
        out.push('\n');
    }
    out
}

/// Statements grouped under their program headings
pub fn format_questions(items: &[SurveyItem]) -> String {
    let mut out = String::new();
    let mut last = None;
    for item in items {
        if last != Some(item.program) {
            if last.is_some() {
                out.push('\n');
            }
            out.push_str(item.program.as_ref());
            out.push('\n');
            last = Some(item.program);
        }
        out.push_str("  - ");
        out.push_str(item.question);
        out.push('\n');
    }
    out
}

/// Pretty JSON for any serializable report
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
