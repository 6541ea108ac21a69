//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::RunOptions;
use crate::error::{RecommenderError, Result};
use crate::session::{Advance, SurveySession};
use crate::types::LikertScore;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Shown when the user tries to move on without answering
pub const SELECT_ANSWER_MESSAGE: &str = "Please select an answer.";

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    options: RunOptions,
    rng: StdRng,
}

impl App {
    /// Create a new application instance
    pub fn new(options: RunOptions) -> Self {
        info!(?options, "Creating new App instance");
        Self {
            state: AppState::with_options(&options),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            rng: options.rng(),
            options,
        }
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal
                .draw(|f| {
                    self.ui_renderer
                        .render(f, &self.state, &self.keybinding_context);
                })
                .map_err(|e| RecommenderError::terminal(format!("Failed to draw frame: {}", e)))?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    // Next draw picks up the new size
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle keyboard input. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // Help overlay - ? or Esc dismisses it, everything else is swallowed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return Ok(false);
        }

        let Some(action) =
            self.keybinding_context
                .resolve(&self.state.mode, key_event.code, key_event.modifiers)
        else {
            return Ok(false);
        };
        debug!(mode = ?self.state.mode, ?action, "Key action");

        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.toggle_help(),
            _ => match self.state.mode {
                AppMode::Welcome => self.handle_welcome_action(action),
                AppMode::Question => self.handle_question_action(action)?,
                AppMode::Results => self.handle_results_action(action),
            },
        }

        Ok(false)
    }

    fn handle_welcome_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp | KeyAction::NavigateDown => {
                self.state.status_choice = self.state.status_choice.toggled();
            }
            KeyAction::Next => self.start_survey(),
            _ => {}
        }
    }

    fn handle_question_action(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::PreviousOption => {
                self.state.likert_cursor = self.state.likert_cursor.lower();
            }
            KeyAction::NextOption => {
                self.state.likert_cursor = self.state.likert_cursor.higher();
            }
            KeyAction::Select => self.answer(self.state.likert_cursor),
            KeyAction::Answer(value) => {
                if let Ok(score) = LikertScore::try_from(value) {
                    self.answer(score);
                }
            }
            KeyAction::Next => self.next_question()?,
            KeyAction::Back => self.previous_question(),
            _ => {}
        }
        Ok(())
    }

    fn handle_results_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => {
                self.state.results_scroll = self.state.results_scroll.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                let last = self.state.recommendations.len().saturating_sub(1);
                self.state.results_scroll = (self.state.results_scroll + 1).min(last);
            }
            KeyAction::Back => {
                // Review answers starting from the last question
                self.state.mode = AppMode::Question;
                self.sync_cursor();
            }
            KeyAction::Restart => self.restart(),
            _ => {}
        }
    }

    /// Begin a survey for the highlighted status
    fn start_survey(&mut self) {
        let status = self.state.status_choice;
        let session = SurveySession::start(status, self.options.shuffle, &mut self.rng);
        self.state.session = Some(session);
        self.state.likert_cursor = LikertScore::Neutral;
        self.state.status_message = None;
        self.state.mode = AppMode::Question;
    }

    /// Record an answer for the current question
    fn answer(&mut self, score: LikertScore) {
        if let Some(session) = self.state.session.as_mut() {
            session.select(score);
            self.state.likert_cursor = score;
            self.state.status_message = None;
        }
    }

    fn next_question(&mut self) -> Result<()> {
        let Some(session) = self.state.session.as_mut() else {
            return Ok(());
        };
        match session.advance() {
            Ok(Advance::Next) => {
                self.state.status_message = None;
                self.sync_cursor();
            }
            Ok(Advance::Finished) => self.show_results()?,
            Err(e) if e.is_missing_answer() => {
                self.state.status_message = Some(SELECT_ANSWER_MESSAGE.to_string());
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn previous_question(&mut self) {
        if let Some(session) = self.state.session.as_mut() {
            if session.back() {
                self.state.status_message = None;
                self.sync_cursor();
            }
        }
    }

    /// Point the answer cursor at the stored answer, or the middle
    fn sync_cursor(&mut self) {
        self.state.likert_cursor = self
            .state
            .session
            .as_ref()
            .and_then(SurveySession::selection)
            .unwrap_or(LikertScore::Neutral);
    }

    fn show_results(&mut self) -> Result<()> {
        let Some(session) = self.state.session.as_ref() else {
            return Ok(());
        };
        let recommendations = session.recommendations()?;
        info!(
            status = %session.status(),
            top = recommendations.first().map(|r| r.program.as_ref()).unwrap_or("none"),
            "Showing results"
        );
        self.state.recommendations = recommendations;
        self.state.results_scroll = 0;
        self.state.status_message = None;
        self.state.mode = AppMode::Results;
        Ok(())
    }

    /// Drop the finished session and return to the welcome screen
    fn restart(&mut self) {
        info!("Restarting survey");
        let status_choice = self.state.status_choice;
        self.state = AppState {
            status_choice,
            ..AppState::default()
        };
    }
}
