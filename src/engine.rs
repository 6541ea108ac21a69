//! Recommendation scoring engine
//!
//! Turns a complete `Response` into a ranked list of programs with a
//! percentage fit. The computation is pure: no I/O, no shared state.
//!
//! # Algorithm
//!
//! 1. Sum the recorded scores of each program.
//! 2. Keep the programs whose tier matches the student's status.
//! 3. Stable-sort by total, highest first. Ties keep catalog order.
//! 4. Map each total linearly so that all-1 answers give 0% and all-5
//!    answers give 100%.

use crate::error::{RecommenderError, Result};
use crate::response::Response;
use crate::types::{LikertScore, Program, StudentStatus};
use serde::Serialize;
use tracing::{debug, instrument};

/// A ranked program with its fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub program: Program,
    /// Raw sum of the program's scores
    pub total_score: u32,
    /// Number of statements that contributed to the total
    pub question_count: usize,
    /// Fit in 0..=100
    pub percentage_fit: u8,
}

/// Percentage fit for a raw `total_score` over `question_count` statements.
///
/// `highest_possible = k*5 - k` and `adjusted = total - k`; the ratio is
/// rounded half-to-even. A program with no statements scores 0. Totals
/// outside `k..=5k` are clamped into 0..=100.
pub fn percentage_fit(total_score: u32, question_count: usize) -> u8 {
    let k = question_count as i64;
    let highest_possible = k * i64::from(LikertScore::MAX) - k;
    if highest_possible == 0 {
        return 0;
    }
    let adjusted_total = i64::from(total_score) - k;
    let fit = (adjusted_total as f64 / highest_possible as f64 * 100.0).round_ties_even();
    fit.clamp(0.0, 100.0) as u8
}

/// Sum the scores of one program, rejecting unanswered or out-of-range values
fn total_for<'a>(
    program: Program,
    scores: impl IntoIterator<Item = (&'a String, &'a u8)>,
) -> Result<(u32, usize)> {
    let mut total = 0u32;
    let mut count = 0usize;
    for (question, &score) in scores {
        match score {
            0 => return Err(RecommenderError::incomplete(program.to_string(), question.as_str())),
            s if s > LikertScore::MAX => {
                return Err(RecommenderError::InvalidScore {
                    program: program.to_string(),
                    question: question.clone(),
                    score: s,
                });
            }
            s => {
                total += u32::from(s);
                count += 1;
            }
        }
    }
    Ok((total, count))
}

/// Rank the programs of `status` found in `response`.
///
/// Every recorded score must be in 1..=5. Programs of the other tier are
/// skipped (but still validated). Output is sorted by total score
/// descending; equal totals keep catalog order.
#[instrument(level = "debug", skip(response), fields(programs = response.len()))]
pub fn recommend(response: &Response, status: StudentStatus) -> Result<Vec<Recommendation>> {
    let mut ranked = Vec::with_capacity(response.len());

    for (program, scores) in response.iter() {
        let (total_score, question_count) = total_for(program, scores)?;
        if !program.matches(status) {
            continue;
        }
        ranked.push(Recommendation {
            program,
            total_score,
            question_count,
            percentage_fit: percentage_fit(total_score, question_count),
        });
    }

    // sort_by is stable, so ties stay in catalog order
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    debug!(
        status = %status,
        ranked = ranked.len(),
        top = ranked.first().map(|r| r.program.as_ref()).unwrap_or("none"),
        "Recommendations computed"
    );
    Ok(ranked)
}
