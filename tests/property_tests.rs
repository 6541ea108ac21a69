//! Property-Based Tests for degreefit
//!
//! Uses proptest for testing scoring invariants
//!
//! These tests verify:
//! - Percentage fit stays within 0..=100
//! - Ranking is sorted and independent of recording order
//! - The all-1 / all-5 extremes map to 0% / 100%
//! - Enum string round-trips

use proptest::prelude::*;

use degreefit::catalog::questions_for;
use degreefit::theme::fit_color;
use degreefit::{percentage_fit, recommend, LikertScore, Program, Response, StudentStatus};
use ratatui::style::Color;

/// Strategy for generating a student status
fn status_strategy() -> impl Strategy<Value = StudentStatus> {
    prop_oneof![
        Just(StudentStatus::Undergraduate),
        Just(StudentStatus::Graduate),
    ]
}

/// A status with one valid score per catalog statement
fn answered_survey() -> impl Strategy<Value = (StudentStatus, Vec<u8>)> {
    status_strategy().prop_flat_map(|status| {
        let n = questions_for(status).len();
        (Just(status), prop::collection::vec(1u8..=5, n))
    })
}

fn build_response(status: StudentStatus, scores: &[u8], order: &[usize]) -> Response {
    let items = questions_for(status);
    let mut response = Response::new();
    for &i in order {
        response.record(items[i].program, items[i].question, scores[i]);
    }
    response
}

// =============================================================================
// Percentage Fit Property Tests
// =============================================================================

proptest! {
    /// Fit is bounded for any valid set of scores
    #[test]
    fn fit_is_bounded(scores in prop::collection::vec(1u8..=5, 1..20)) {
        let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let fit = percentage_fit(total, scores.len());
        prop_assert!(fit <= 100);
    }

    /// Uniform answers hit the extremes: all 1 → 0, all 5 → 100
    #[test]
    fn uniform_extremes(k in 1usize..20) {
        prop_assert_eq!(percentage_fit(k as u32, k), 0);
        prop_assert_eq!(percentage_fit(5 * k as u32, k), 100);
    }

    /// Raising one score never lowers the fit
    #[test]
    fn fit_is_monotonic(k in 1usize..20, extra in 0u32..4) {
        let base = 2 * k as u32;
        prop_assert!(percentage_fit(base + extra, k) <= percentage_fit(base + extra + 1, k));
    }
}

// =============================================================================
// Ranking Property Tests
// =============================================================================

proptest! {
    /// Every tier program is ranked, highest total first, fit in range
    #[test]
    fn ranking_is_sorted_and_bounded((status, scores) in answered_survey()) {
        let order: Vec<usize> = (0..scores.len()).collect();
        let ranked = recommend(&build_response(status, &scores, &order), status).unwrap();

        prop_assert_eq!(ranked.len(), Program::for_status(status).count());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].total_score >= pair[1].total_score);
        }
        for rec in &ranked {
            prop_assert!(rec.percentage_fit <= 100);
            prop_assert_eq!(rec.program.tier(), status);
            prop_assert_eq!(rec.question_count, 5);
        }
    }

    /// Recording order has no effect on the result
    #[test]
    fn ranking_ignores_recording_order(
        (status, scores, order) in answered_survey().prop_flat_map(|(status, scores)| {
            let order: Vec<usize> = (0..scores.len()).collect();
            (Just(status), Just(scores), Just(order).prop_shuffle())
        })
    ) {
        let in_order: Vec<usize> = (0..scores.len()).collect();
        let expected = recommend(&build_response(status, &scores, &in_order), status).unwrap();
        let shuffled = recommend(&build_response(status, &scores, &order), status).unwrap();
        prop_assert_eq!(expected, shuffled);
    }
}

// =============================================================================
// Enum Property Tests
// =============================================================================

fn program_strategy() -> impl Strategy<Value = Program> {
    use strum::IntoEnumIterator;
    let programs: Vec<Program> = Program::iter().collect();
    prop::sample::select(programs)
}

proptest! {
    /// Program: to_string → parse round-trip is identity
    #[test]
    fn program_roundtrip(program in program_strategy()) {
        let parsed = Program::parse(&program.to_string()).expect("Should parse");
        prop_assert_eq!(program, parsed);
    }

    /// LikertScore: only 1..=5 convert
    #[test]
    fn likert_conversion(value in any::<u8>()) {
        let converted = LikertScore::try_from(value);
        prop_assert_eq!(converted.is_ok(), (1..=5).contains(&value));
        if let Ok(score) = converted {
            prop_assert_eq!(score.value(), value);
        }
    }

    /// Gradient never gets redder as the fit rises
    #[test]
    fn fit_color_is_monotonic(p in 0u8..100) {
        let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (fit_color(p), fit_color(p + 1)) else {
            panic!("fit_color must return RGB");
        };
        prop_assert!(r2 <= r1);
        prop_assert!(g2 >= g1);
        prop_assert_eq!((b1, b2), (0, 0));
    }
}
