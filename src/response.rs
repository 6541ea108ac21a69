//! Survey response value object
//!
//! A `Response` is built by the survey session (or loaded from a JSON file)
//! and handed to the engine once every question has an answer. It only ever
//! grows: recording a question twice replaces the score, nothing is removed.

use crate::error::{RecommenderError, Result};
use crate::types::{LikertScore, Program, StudentStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Per-program answers keyed by statement text.
///
/// Scores are raw integers so file input can carry the 0 "unanswered"
/// sentinel; the engine rejects anything outside 1..=5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    answers: BTreeMap<Program, BTreeMap<String, u8>>,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw score for one statement
    pub fn record(&mut self, program: Program, question: impl Into<String>, score: u8) {
        self.answers
            .entry(program)
            .or_default()
            .insert(question.into(), score);
    }

    /// Record a Likert answer for one statement
    pub fn record_answer(&mut self, program: Program, question: impl Into<String>, answer: LikertScore) {
        self.record(program, question, answer.value());
    }

    /// Scores recorded for `program`, if any
    pub fn scores(&self, program: Program) -> Option<&BTreeMap<String, u8>> {
        self.answers.get(&program)
    }

    /// Programs present in this response, in catalog order
    pub fn programs(&self) -> impl Iterator<Item = Program> + '_ {
        self.answers.keys().copied()
    }

    /// Iterate over (program, scores) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Program, &BTreeMap<String, u8>)> {
        self.answers.iter().map(|(p, s)| (*p, s))
    }

    /// Number of programs with at least one recorded answer
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Total number of recorded statements across programs
    pub fn answer_count(&self) -> usize {
        self.answers.values().map(BTreeMap::len).sum()
    }

    /// Check that every program of `status` carries exactly its catalog statements.
    ///
    /// Programs of the other tier are ignored; the engine filters them out.
    pub fn check_complete(&self, status: StudentStatus) -> Result<()> {
        for program in Program::for_status(status) {
            let scores = self.answers.get(&program);
            for &question in program.questions() {
                match scores.and_then(|s| s.get(question)) {
                    Some(0) | None => {
                        return Err(RecommenderError::incomplete(program.to_string(), question));
                    }
                    Some(_) => {}
                }
            }
            if let Some(scores) = scores {
                if let Some(extra) = scores.keys().find(|q| !program.has_question(q)) {
                    return Err(RecommenderError::validation(format!(
                        "{:?} is not a statement of {}",
                        extra, program
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse a response from JSON: `{ "<program>": { "<statement>": <score> } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, u8>> = serde_json::from_str(json)?;
        let mut response = Self::new();
        for (name, scores) in raw {
            let program = Program::parse(&name)?;
            for (question, score) in scores {
                response.record(program, question, score);
            }
        }
        Ok(response)
    }

    /// Load a response from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading response file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let response = Self::from_json(&content)?;
        debug!(
            programs = response.len(),
            answers = response.answer_count(),
            "Response file loaded"
        );
        Ok(response)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions_for;

    fn complete(status: StudentStatus, score: u8) -> Response {
        let mut response = Response::new();
        for item in questions_for(status) {
            response.record(item.program, item.question, score);
        }
        response
    }

    #[test]
    fn test_record_overwrites_without_shrinking() {
        let mut response = Response::new();
        response.record(Program::BsComputerScience, "q1", 2);
        response.record(Program::BsComputerScience, "q1", 4);
        assert_eq!(response.answer_count(), 1);
        assert_eq!(
            response.scores(Program::BsComputerScience).and_then(|s| s.get("q1")),
            Some(&4)
        );
    }

    #[test]
    fn test_check_complete_accepts_full_tier() {
        assert!(complete(StudentStatus::Graduate, 3)
            .check_complete(StudentStatus::Graduate)
            .is_ok());
    }

    #[test]
    fn test_check_complete_flags_sentinel_and_missing() {
        let mut response = complete(StudentStatus::Graduate, 3);
        let q = Program::MsDataAnalytics.questions()[1];
        response.record(Program::MsDataAnalytics, q, 0);
        assert!(matches!(
            response.check_complete(StudentStatus::Graduate),
            Err(RecommenderError::IncompleteResponse { .. })
        ));

        // Graduate answers say nothing about the undergraduate tier
        assert!(response.check_complete(StudentStatus::Undergraduate).is_err());
    }

    #[test]
    fn test_check_complete_rejects_foreign_statement() {
        let mut response = complete(StudentStatus::Graduate, 3);
        response.record(Program::MsItManagement, "I like turtles.", 5);
        assert!(matches!(
            response.check_complete(StudentStatus::Graduate),
            Err(RecommenderError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_program() {
        let err = Response::from_json(r#"{"Bachelor of Arts, History": {"q": 3}}"#).unwrap_err();
        assert!(matches!(err, RecommenderError::UnknownProgram(_)));
    }

    #[test]
    fn test_json_shape() {
        let mut response = Response::new();
        response.record(Program::MsDataAnalytics, "q1", 5);
        let json = response.to_json().unwrap();
        assert!(json.contains("\"Master of Science, Data Analytics\""));
        assert_eq!(Response::from_json(&json).unwrap(), response);
    }
}
