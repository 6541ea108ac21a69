//! Survey session state walk
//!
//! One session covers a single respondent from status choice to results:
//! a shuffled list of statements, a cursor, and one optional answer per
//! statement. Forward movement is blocked until the current statement has
//! an answer; moving back keeps earlier answers.
//!
//! # Invariants
//!
//! - The statement list is exactly `questions_for(status)`, reordered
//! - `answers.len() == items.len()` at all times
//! - A `Response` is only produced once every statement has an answer

use crate::catalog::{items_for_programs, programs_for, SurveyItem};
use crate::engine::{recommend, Recommendation};
use crate::error::{RecommenderError, Result};
use crate::response::Response;
use crate::types::{LikertScore, StudentStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// Outcome of a successful `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next statement
    Next,
    /// The last statement was answered
    Finished,
}

/// State of one survey run
#[derive(Debug, Clone)]
pub struct SurveySession {
    status: StudentStatus,
    items: Vec<SurveyItem>,
    answers: Vec<Option<LikertScore>>,
    current: usize,
    finished: bool,
}

impl SurveySession {
    /// Start a session for `status`.
    ///
    /// With `shuffle`, program order is randomized first and then the
    /// flattened statement list, so programs interleave.
    pub fn start<R: Rng + ?Sized>(status: StudentStatus, shuffle: bool, rng: &mut R) -> Self {
        let mut programs = programs_for(status);
        if shuffle {
            programs.shuffle(rng);
        }
        let mut items = items_for_programs(&programs);
        if shuffle {
            items.shuffle(rng);
        }
        info!(status = %status, questions = items.len(), shuffle, "Survey started");
        Self::from_items(status, items)
    }

    /// Build a session over an explicit statement order
    pub fn from_items(status: StudentStatus, items: Vec<SurveyItem>) -> Self {
        let answers = vec![None; items.len()];
        Self {
            status,
            items,
            answers,
            current: 0,
            finished: false,
        }
    }

    pub fn status(&self) -> StudentStatus {
        self.status
    }

    pub fn items(&self) -> &[SurveyItem] {
        &self.items
    }

    /// Statement under the cursor
    pub fn current(&self) -> Option<&SurveyItem> {
        self.items.get(self.current)
    }

    /// Zero-based cursor position
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the last statement has been answered and passed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of statements with an answer
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Share of statements answered, 0..=100
    pub fn progress_percent(&self) -> u16 {
        if self.items.is_empty() {
            return 100;
        }
        (self.answered() * 100 / self.items.len()) as u16
    }

    /// Answer currently selected for the statement under the cursor
    pub fn selection(&self) -> Option<LikertScore> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Select an answer for the statement under the cursor
    pub fn select(&mut self, answer: LikertScore) {
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(answer);
        }
    }

    /// Move to the next statement.
    ///
    /// Fails with `IncompleteResponse` when nothing is selected.
    pub fn advance(&mut self) -> Result<Advance> {
        let item = self
            .current()
            .copied()
            .ok_or_else(|| RecommenderError::validation("survey has no current question"))?;
        if self.selection().is_none() {
            debug!(position = self.current, "Advance blocked: no answer selected");
            return Err(RecommenderError::incomplete(item.program.to_string(), item.question));
        }
        if self.current + 1 >= self.items.len() {
            self.finished = true;
            info!(answered = self.answered(), "Survey completed");
            return Ok(Advance::Finished);
        }
        self.current += 1;
        Ok(Advance::Next)
    }

    /// Move to the previous statement. Returns false at the first one.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.finished = false;
        true
    }

    /// Collect the answers into a `Response`
    pub fn response(&self) -> Result<Response> {
        let mut response = Response::new();
        for (item, answer) in self.items.iter().zip(&self.answers) {
            let answer = answer
                .ok_or_else(|| RecommenderError::incomplete(item.program.to_string(), item.question))?;
            response.record_answer(item.program, item.question, answer);
        }
        Ok(response)
    }

    /// Score the completed session
    pub fn recommendations(&self) -> Result<Vec<Recommendation>> {
        let response = self.response()?;
        recommend(&response, self.status)
    }
}
