//! Header and common widget rendering
//!
//! Title banner, survey progress gauge, validation message line and the
//! navigation bar shared by every screen.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{KeybindingContext, NavBarItem};
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Banner shown at the top of every screen
pub const APP_TITLE: &str = "Degree Program Interest Survey";

/// Header renderer containing the banner lines
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: vec![
                Line::from(Span::styled(APP_TITLE, Styles::title())),
                Line::from(Span::styled(
                    "Rate each statement to find the program that fits you",
                    Styles::text_muted(),
                )),
            ],
        }
    }

    /// Rows the banner needs
    pub fn height(&self) -> u16 {
        self.header_lines.len() as u16
    }

    /// Render the banner
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone()).alignment(Alignment::Center);
        f.render_widget(header, area);
    }
}

/// Render the survey progress gauge
pub fn render_progress_bar(f: &mut Frame, area: Rect, position: usize, total: usize, percent: u16) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Styles::progress())
        .label(format!("Question {} of {}", position + 1, total))
        .percent(percent.min(100));
    f.render_widget(gauge, area);
}

/// Render the validation message, if any
pub fn render_status_message(f: &mut Frame, area: Rect, state: &AppState) {
    if let Some(message) = &state.status_message {
        let widget = Paragraph::new(message.as_str())
            .style(Styles::error())
            .alignment(Alignment::Center);
        f.render_widget(widget, area);
    }
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext, area: Rect) {
    let items = keybinding_ctx.get_nav_items(&state.mode);
    f.render_widget(Paragraph::new(nav_line(&items)), area);
}

/// Nav bar text: `Key Label  Key Label ...`
pub fn nav_line(items: &[NavBarItem]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display.clone(), Styles::key_hint()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    Line::from(spans)
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
