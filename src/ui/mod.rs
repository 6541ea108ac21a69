//! User interface rendering module
//!
//! - `header` - Banner, progress gauge, nav bar and help overlay
//! - `screens` - Welcome, question and results screens

pub mod header;
pub mod screens;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for drawing a frame; delegates to the screen modules.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::Welcome => {
                screens::render_welcome_screen(f, state, content_area, &self.header);
            }
            AppMode::Question => {
                screens::render_question_screen(f, state, content_area, &self.header);
            }
            AppMode::Results => {
                screens::render_results_screen(f, state, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
