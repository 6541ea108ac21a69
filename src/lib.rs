//! Degree program survey library
//!
//! Asks Likert-scale statements about each degree program, scores the answers
//! and ranks programs by percentage fit. The terminal UI lives in `app`/`ui`;
//! everything below it is usable headless.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod response;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{programs_for, questions_for, SurveyItem, QUESTIONS_PER_PROGRAM};
pub use engine::{percentage_fit, recommend, Recommendation};
pub use error::{RecommenderError, Result};
pub use response::Response;
pub use session::{Advance, SurveySession};
pub use types::{LikertScore, Program, StudentStatus};
