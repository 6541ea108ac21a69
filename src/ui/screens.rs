//! Survey screens
//!
//! - Welcome: pick a student status
//! - Question: one statement with the five Likert answers
//! - Results: ranked programs with colored fit bars

use super::header::{self, HeaderRenderer};
use crate::app::AppState;
use crate::report::recommendation_line;
use crate::theme::{fit_bar_width, fit_color, Colors, Styles};
use crate::types::{LikertScore, StudentStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

/// Width of the fit bar area on the results screen
const FIT_BAR_MAX_WIDTH: u16 = 30;

/// Rows taken by one result entry (label + bar + spacer)
pub const RESULT_ROWS: u16 = 3;

pub fn render_welcome_screen(f: &mut Frame, state: &AppState, area: Rect, banner: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner.height() + 1),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    banner.render_header(f, chunks[0]);

    let prompt = Paragraph::new(vec![Line::from(Span::styled(
        "Please select your student status to begin the survey:",
        Styles::text(),
    ))])
    .alignment(Alignment::Center);
    f.render_widget(prompt, chunks[1]);

    let statuses: Vec<StudentStatus> = StudentStatus::iter().collect();
    let items: Vec<ListItem> = statuses
        .iter()
        .map(|s| ListItem::new(format!("  {}  ", s)))
        .collect();
    let selected = statuses.iter().position(|s| *s == state.status_choice);
    let mut list_state = ListState::default().with_selected(selected);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(" Student Status "),
        )
        .style(Styles::unselected())
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");
    let list_area = centered_column(chunks[2], 40);
    f.render_stateful_widget(list, list_area, &mut list_state);

    let start = Paragraph::new(Span::styled("Press Enter to start the survey", Styles::text_muted()))
        .alignment(Alignment::Center);
    f.render_widget(start, chunks[3]);
}

pub fn render_question_screen(f: &mut Frame, state: &AppState, area: Rect, banner: &HeaderRenderer) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    let Some(item) = session.current() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner.height() + 1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    banner.render_header(f, chunks[0]);
    header::render_progress_bar(
        f,
        chunks[1],
        session.position(),
        session.len(),
        session.progress_percent(),
    );

    let statement = Paragraph::new(Line::from(Span::styled(item.question, Styles::text_bold())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(" Statement "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(statement, chunks[2]);

    let chosen = session.selection();
    let answers = Paragraph::new(likert_line(state.likert_cursor, chosen))
        .block(Block::default().borders(Borders::ALL).title(" Your answer "))
        .alignment(Alignment::Center);
    f.render_widget(answers, chunks[3]);

    header::render_status_message(f, chunks[4], state);
}

/// The five answers on one line; `(*)` marks the chosen one, the cursor is highlighted
pub fn likert_line(cursor: LikertScore, chosen: Option<LikertScore>) -> Line<'static> {
    let mut spans = Vec::new();
    for score in LikertScore::iter() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        let marker = if chosen == Some(score) { "(*)" } else { "( )" };
        let style = if score == cursor {
            Styles::selected()
        } else if chosen == Some(score) {
            Style::default().fg(Colors::SECONDARY)
        } else {
            Styles::unselected()
        };
        spans.push(Span::styled(
            format!("{} {} {}", score.value(), marker, score),
            style,
        ));
    }
    Line::from(spans)
}

pub fn render_results_screen(f: &mut Frame, state: &AppState, area: Rect, banner: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner.height() + 1),
            Constraint::Length(2),
            Constraint::Min(RESULT_ROWS),
        ])
        .split(area);

    banner.render_header(f, chunks[0]);

    let heading = Paragraph::new(Span::styled("Survey Completed!", Styles::success()))
        .alignment(Alignment::Center);
    f.render_widget(heading, chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(" Recommended Programs ");
    let inner = block.inner(chunks[2]);
    f.render_widget(block, chunks[2]);

    let lines = results_lines(state, inner.width.saturating_sub(2).min(FIT_BAR_MAX_WIDTH));
    let results = Paragraph::new(lines).scroll(((state.results_scroll as u16) * RESULT_ROWS, 0));
    f.render_widget(results, inner);
}

/// Label, colored bar and spacer for every ranked program
pub fn results_lines(state: &AppState, bar_width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(state.recommendations.len() * RESULT_ROWS as usize);
    for (i, rec) in state.recommendations.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!(" {}", recommendation_line(i + 1, rec)),
            Styles::text(),
        )));
        let filled = fit_bar_width(rec.percentage_fit, bar_width);
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " ".repeat(filled as usize),
                Style::default().bg(fit_color(rec.percentage_fit)),
            ),
            Span::styled(
                " ".repeat(bar_width.saturating_sub(filled) as usize),
                Style::default().bg(Colors::BG_GAUGE),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

/// Horizontally centered column of `width` cells inside `area`
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
