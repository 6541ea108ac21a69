//! Application state definitions
//!
//! Contains the screen mode and everything the renderer needs to draw a frame.

use crate::config::RunOptions;
use crate::engine::Recommendation;
use crate::session::SurveySession;
use crate::types::{LikertScore, StudentStatus};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Welcome screen with student status selection
    Welcome,
    /// One Likert statement at a time
    Question,
    /// Ranked programs with fit bars
    Results,
}

impl AppMode {
    /// Display name for the help overlay
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Question => "Survey",
            Self::Results => "Results",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen
    pub mode: AppMode,
    /// Status highlighted on the welcome screen
    pub status_choice: StudentStatus,
    /// Active survey, created when the user starts
    pub session: Option<SurveySession>,
    /// Answer highlighted on the question screen
    pub likert_cursor: LikertScore,
    /// Scored programs for the results screen
    pub recommendations: Vec<Recommendation>,
    /// First visible result row
    pub results_scroll: usize,
    /// Validation message shown under the current screen
    pub status_message: Option<String>,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Fresh state honoring the run options' status preset
    pub fn with_options(options: &RunOptions) -> Self {
        Self {
            status_choice: options.status.unwrap_or_default(),
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Welcome,
            status_choice: StudentStatus::Undergraduate,
            session: None,
            likert_cursor: LikertScore::Neutral,
            recommendations: Vec::new(),
            results_scroll: 0,
            status_message: None,
            help_visible: false,
        }
    }
}
