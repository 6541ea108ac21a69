//! Render smoke tests
//!
//! Draw every screen into a ratatui `TestBackend` and check the text that
//! lands in the buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use degreefit::app::{App, AppState};
use degreefit::components::keybindings::KeybindingContext;
use degreefit::config::RunOptions;
use degreefit::ui::UiRenderer;
use degreefit::StudentStatus;
use ratatui::{backend::TestBackend, Terminal};

fn draw(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let renderer = UiRenderer::new();
    let ctx = KeybindingContext::new();
    terminal.draw(|f| renderer.render(f, state, &ctx)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn graduate_app() -> App {
    App::new(RunOptions {
        status: Some(StudentStatus::Graduate),
        shuffle: false,
        seed: None,
    })
}

#[test]
fn test_welcome_screen() {
    let text = draw(&AppState::default(), 100, 30);
    assert!(text.contains("Degree Program Interest Survey"));
    assert!(text.contains("Undergraduate"));
    assert!(text.contains("Graduate"));
    assert!(text.contains("Start survey"));
}

#[test]
fn test_question_screen_and_validation_message() {
    let mut app = graduate_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let text = draw(app.state(), 120, 30);
    assert!(text.contains("Question 1 of 15"));
    assert!(text.contains("Strongly Agree"));
    assert!(text.contains("Please select an answer."));
}

#[test]
fn test_results_screen() {
    let mut app = graduate_app();
    press(&mut app, KeyCode::Enter);
    while app.state().recommendations.is_empty() {
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
    }

    let text = draw(app.state(), 120, 30);
    assert!(text.contains("Survey Completed!"));
    assert!(text.contains("1. Master of Science, Cybersecurity and Information Assurance - 100% fit"));
    assert!(text.contains("New survey"));
}

#[test]
fn test_help_overlay_and_tiny_terminal() {
    let mut app = graduate_app();
    press(&mut app, KeyCode::Char('?'));
    let text = draw(app.state(), 100, 40);
    assert!(text.contains("Press ? or Esc to close"));

    // Must not panic when squeezed
    draw(app.state(), 10, 3);
    draw(&AppState::default(), 1, 1);
}
